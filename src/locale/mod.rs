//! Arabic number rendering.
//!
//! A [`Printer`] renders integers with the configured digit glyphs and no
//! thousands separator. The two numeral systems each have a process-wide
//! printer, built on first use and never torn down.

mod builtin;

pub use builtin::Locale;

use std::sync::OnceLock;

use crate::options::{FormatOptions, Numerals};

static ARABIC_INDIC: OnceLock<Printer> = OnceLock::new();
static LATIN: OnceLock<Printer> = OnceLock::new();

/// Locale-aware number printer.
#[derive(Debug, Clone)]
pub struct Printer {
    numerals: Numerals,
    locale: Locale,
}

impl Printer {
    /// Build a printer from explicit options.
    pub fn new(opts: &FormatOptions) -> Self {
        Printer {
            numerals: opts.numerals,
            locale: opts.locale.clone(),
        }
    }

    /// The shared printer for `numerals` with the default locale.
    pub fn shared(numerals: Numerals) -> &'static Printer {
        let cell = match numerals {
            Numerals::ArabicIndic => &ARABIC_INDIC,
            Numerals::Latin => &LATIN,
        };
        cell.get_or_init(|| {
            Printer::new(&FormatOptions {
                numerals,
                locale: Locale::default(),
            })
        })
    }

    pub fn numerals(&self) -> Numerals {
        self.numerals
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render `value` without grouping separators.
    pub fn number(&self, value: u64) -> String {
        self.padded(value, 1)
    }

    /// Render `value` left-padded with zeros to at least `width` digits.
    pub fn padded(&self, value: u64, width: usize) -> String {
        let ascii = format!("{:0width$}", value, width = width);
        ascii
            .bytes()
            .map(|b| self.numerals.digit(b - b'0'))
            .collect()
    }
}
