//! Error types for calendar conversion.

use thiserror::Error;

/// Errors that can occur when converting between calendars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The date falls outside the Umm al-Qura table, or the Hijri triple
    /// does not name a real day.
    #[error("date out of conversion range: {year:04}-{month:02}-{day:02}")]
    ConversionOutOfRange { year: i64, month: u32, day: u32 },

    #[error("time zone database unavailable for zone '{zone}'")]
    ZoneDatabaseUnavailable { zone: &'static str },

    #[error("gregorian date arithmetic overflowed")]
    InvalidGregorian,
}
