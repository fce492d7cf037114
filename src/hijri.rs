//! Umm al-Qura (Hijri) calendar conversion
//!
//! This module is the only place the crate talks to the Umm al-Qura table
//! and to the time zone database. Everything else goes through the two
//! conversion functions and [`riyadh`].
//!
//! ## Range
//!
//! The Umm al-Qura calendar is table-driven: month lengths come from the
//! published table rather than from an astronomical rule. Dates outside the
//! table (roughly 1938 to 2076 CE) cannot be converted and are reported as
//! [`CalendarError::ConversionOutOfRange`] instead of being approximated.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;
use hijri_date::HijriDate as UmmAlQura;

use crate::error::CalendarError;

/// IANA name of the zone Hijri dates are displayed in.
pub const RIYADH: &str = "Asia/Riyadh";

static ZONE: OnceLock<Option<Tz>> = OnceLock::new();

/// A Hijri day as returned by the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriParts {
    pub year: u32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month (1-30)
    pub day: u32,
    /// Day of the week shared with the Gregorian date
    pub weekday: Weekday,
}

/// Look up the `Asia/Riyadh` zone.
///
/// The lookup happens once per process; later calls reuse the result.
pub fn riyadh() -> Result<Tz, CalendarError> {
    let zone = ZONE.get_or_init(|| match RIYADH.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_err) => {
            warn!("failed loading zone {RIYADH}: {_err}");
            None
        }
    });
    (*zone).ok_or(CalendarError::ZoneDatabaseUnavailable { zone: RIYADH })
}

/// Convert a Gregorian date to its Umm al-Qura date.
///
/// # Errors
/// Returns `ConversionOutOfRange` if `date` lies outside the table.
pub fn gregorian_to_hijri(date: NaiveDate) -> Result<HijriParts, CalendarError> {
    let out_of_range = || CalendarError::ConversionOutOfRange {
        year: i64::from(date.year()),
        month: date.month(),
        day: date.day(),
    };

    let year = usize::try_from(date.year()).map_err(|_| out_of_range())?;
    let hd = UmmAlQura::from_gr(year, date.month() as usize, date.day() as usize).map_err(
        |_err| {
            debug!("gregorian {date} has no Umm al-Qura date: {_err}");
            out_of_range()
        },
    )?;

    Ok(HijriParts {
        year: hd.year() as u32,
        month: hd.month() as u32,
        day: hd.day() as u32,
        weekday: date.weekday(),
    })
}

/// Convert an Umm al-Qura date to its Gregorian date.
///
/// # Errors
/// Returns `ConversionOutOfRange` for a triple that is not a real Hijri day
/// or that lies outside the table.
pub fn hijri_to_gregorian(year: u32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::ConversionOutOfRange {
        year: i64::from(year),
        month,
        day,
    };

    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(out_of_range());
    }

    let hd = UmmAlQura::from_hijri(year as usize, month as usize, day as usize).map_err(
        |_err| {
            debug!("hijri {year:04}-{month:02}-{day:02} has no gregorian date: {_err}");
            out_of_range()
        },
    )?;

    let date =
        NaiveDate::from_ymd_opt(hd.year_gr() as i32, hd.month_gr() as u32, hd.day_gr() as u32)
            .ok_or_else(out_of_range)?;

    // The table rolls day 30 of a 29-day month over into the next month.
    let back = gregorian_to_hijri(date)?;
    if (back.year, back.month, back.day) != (year, month, day) {
        debug!("hijri {year:04}-{month:02}-{day:02} read back as {back:?}");
        return Err(out_of_range());
    }
    Ok(date)
}
