//! Arabic duration phrases
//!
//! A duration is reduced to its largest whole unit (days, then hours, then
//! minutes) and rendered with Arabic number agreement. The word for each
//! unit depends on the agreement class of the count:
//!
//! | count | shown as         |
//! |-------|------------------|
//! | 1     | singular word    |
//! | 2     | dual word        |
//! | 3-10  | numeral + plural |
//! | 11+   | numeral + accusative singular |
//!
//! The words themselves live in the locale table.

use chrono::TimeDelta;

use crate::locale::Printer;
use crate::options::{FormatOptions, Numerals};

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// A counted unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day = 0,
    Hour = 1,
    Minute = 2,
}

/// Grammatical number class of a counted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    Singular = 0,
    Dual = 1,
    /// 3 to 10
    Few = 2,
    /// 11 and up
    Many = 3,
}

impl Agreement {
    pub fn of(count: u64) -> Self {
        match count {
            1 => Agreement::Singular,
            2 => Agreement::Dual,
            3..=10 => Agreement::Few,
            _ => Agreement::Many,
        }
    }

    /// Whether the numeral is written before the word.
    pub fn shows_numeral(&self) -> bool {
        matches!(self, Agreement::Few | Agreement::Many)
    }
}

/// Render the most significant whole unit of `d`, minutes being the
/// smallest. Returns an empty string for durations under one minute,
/// negative ones included.
///
/// Numerals use Western digits: `5 أيام`.
pub fn duration_to_text(d: TimeDelta) -> String {
    render(d, Printer::shared(Numerals::Latin))
}

/// Like [`duration_to_text`], with the numeral system and words taken from
/// `opts`.
pub fn duration_to_text_with(d: TimeDelta, opts: &FormatOptions) -> String {
    render(d, &Printer::new(opts))
}

fn render(d: TimeDelta, p: &Printer) -> String {
    let Some((count, unit)) = most_significant_unit(d) else {
        return String::new();
    };

    let agreement = Agreement::of(count);
    let word = p.locale().unit_words[unit as usize][agreement as usize];
    if agreement.shows_numeral() {
        format!("{} {}", p.number(count), word)
    } else {
        word.to_string()
    }
}

/// Split `d` into days, hours and minutes and keep the largest nonzero one.
fn most_significant_unit(d: TimeDelta) -> Option<(u64, TimeUnit)> {
    let minutes = d.num_minutes();

    let days = minutes / MINUTES_PER_DAY;
    let hours = (minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let remaining = minutes % MINUTES_PER_HOUR;

    [
        (days, TimeUnit::Day),
        (hours, TimeUnit::Hour),
        (remaining, TimeUnit::Minute),
    ]
    .into_iter()
    .find(|&(count, _)| count > 0)
    .map(|(count, unit)| (count as u64, unit))
}
