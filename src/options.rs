//! Formatting options and configuration.

use crate::locale::Locale;

/// The digit glyphs used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numerals {
    /// Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩), the Arabic locale default
    #[default]
    ArabicIndic,
    /// Western digits (0123456789)
    Latin,
}

impl Numerals {
    /// Returns the glyph for the decimal digit `d`. Only the last decimal
    /// digit of `d` is used.
    pub fn digit(&self, d: u8) -> char {
        let d = d % 10;
        match self {
            Numerals::ArabicIndic => char::from_u32(0x0660 + u32::from(d)).unwrap_or('?'),
            Numerals::Latin => char::from(b'0' + d),
        }
    }
}

/// Options for formatting dates and durations.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// The digit glyphs for rendered numbers.
    pub numerals: Numerals,
    /// The locale providing month names and unit words.
    pub locale: Locale,
}
