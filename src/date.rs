//! Hijri dates paired with their Gregorian instant
//!
//! A [`HijriDate`] carries an Umm al-Qura (year, month, day, weekday) and
//! the Gregorian instant it was derived from, held in the `Asia/Riyadh`
//! zone. Navigation never mutates; every method returns a new value.
//!
//! The navigation methods do not share one rule for what "the next day" or
//! "the next month" is:
//! - [`HijriDate::add_date`] and [`HijriDate::week_starting_day`] move the
//!   Gregorian instant and re-derive the Hijri date from it;
//! - [`HijriDate::month_starting_day`] and [`HijriDate::next_month_start`]
//!   build the Hijri date first and invert it to a Gregorian instant;
//! - [`HijriDate::current_day_start`] and [`HijriDate::next_day_start`] only
//!   move the Gregorian instant to a midnight and keep the Hijri label as is.
//!   The label is therefore only right for the Gregorian day the value was
//!   built for.

use std::fmt;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::civil::KSA_OFFSET_HOURS;
use crate::error::CalendarError;
use crate::hijri::{self, HijriParts};
use crate::locale::Printer;
use crate::options::{FormatOptions, Numerals};

/// An Umm al-Qura date and its Gregorian instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDate {
    year: u32,
    month: u32,
    day: u32,
    weekday: Weekday,
    gregorian: DateTime<Tz>,
}

impl HijriDate {
    /// The Hijri date of the current instant.
    pub fn now() -> Result<Self, CalendarError> {
        Self::of(&Utc::now())
    }

    /// The Hijri date `instant` falls on in KSA civil time.
    ///
    /// # Errors
    /// Fails if the zone database is unavailable or the date lies outside
    /// the Umm al-Qura table.
    pub fn of<Z: TimeZone>(instant: &DateTime<Z>) -> Result<Self, CalendarError> {
        let zone = hijri::riyadh()?;
        let utc = instant.with_timezone(&Utc);
        let civil = utc + TimeDelta::hours(KSA_OFFSET_HOURS);
        let parts = hijri::gregorian_to_hijri(civil.date_naive())?;
        Ok(Self::from_parts(parts, utc.with_timezone(&zone)))
    }

    /// The first instant of the Hijri day `year-month-day`.
    ///
    /// # Errors
    /// Fails if the triple is not a real Umm al-Qura day.
    pub fn from_hijri(year: u32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let zone = hijri::riyadh()?;
        let date = hijri::hijri_to_gregorian(year, month, day)?;
        Ok(Self::inverted(zone, year, month, day, date))
    }

    fn from_parts(parts: HijriParts, gregorian: DateTime<Tz>) -> Self {
        HijriDate {
            year: parts.year,
            month: parts.month,
            day: parts.day,
            weekday: parts.weekday,
            gregorian,
        }
    }

    /// Pair a Hijri triple with the Gregorian date the table inverted it to.
    /// The weekday comes from that Gregorian date.
    fn inverted(zone: Tz, year: u32, month: u32, day: u32, date: NaiveDate) -> Self {
        let gregorian = (date.and_time(NaiveTime::MIN).and_utc()
            - TimeDelta::hours(KSA_OFFSET_HOURS))
        .with_timezone(&zone);
        HijriDate {
            year,
            month,
            day,
            weekday: gregorian.weekday(),
            gregorian,
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The Arabic name of the Hijri month.
    pub fn month_name(&self) -> &'static str {
        Printer::shared(Numerals::ArabicIndic)
            .locale()
            .hijri_month_name(self.month)
            .unwrap_or_default()
    }

    /// The Hijri fields as a plain tuple.
    pub fn parts(&self) -> HijriParts {
        HijriParts {
            year: self.year,
            month: self.month,
            day: self.day,
            weekday: self.weekday,
        }
    }

    /// The Gregorian instant, in `Asia/Riyadh`.
    pub fn to_gregorian(&self) -> DateTime<Tz> {
        self.gregorian.clone()
    }

    /// Shift the Gregorian instant by whole years, months and days, then
    /// re-derive the Hijri date.
    ///
    /// Overflowing days carry into the next month (31 January plus one
    /// month is 2 or 3 March). The clock time is kept.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Result<Self, CalendarError> {
        let zone = self.gregorian.timezone();
        let local = self.gregorian.naive_local();

        let total_months = i64::from(local.year()) * 12
            + i64::from(local.month0())
            + i64::from(years) * 12
            + i64::from(months);
        let year =
            i32::try_from(total_months.div_euclid(12)).map_err(|_| CalendarError::InvalidGregorian)?;
        let month = total_months.rem_euclid(12) as u32 + 1;

        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| {
                first.checked_add_signed(TimeDelta::days(
                    i64::from(local.day()) - 1 + i64::from(days),
                ))
            })
            .ok_or(CalendarError::InvalidGregorian)?;

        let gregorian = zone
            .from_local_datetime(&date.and_time(local.time()))
            .earliest()
            .ok_or(CalendarError::InvalidGregorian)?;
        let parts = hijri::gregorian_to_hijri(date)?;
        Ok(Self::from_parts(parts, gregorian))
    }

    /// Render as `HH:MM:SS D <month> Y هـ` with Arabic-Indic digits.
    pub fn formatted(&self) -> String {
        self.render(Printer::shared(Numerals::ArabicIndic))
    }

    /// Render as `HH:MM:SS D <month> Y هـ` with explicit options.
    pub fn formatted_with(&self, opts: &FormatOptions) -> String {
        self.render(&Printer::new(opts))
    }

    fn render(&self, p: &Printer) -> String {
        debug!("formatting hijri month {}", self.month);
        let locale = p.locale();
        format!(
            "{}:{}:{} {} {} {} {}",
            p.padded(u64::from(self.gregorian.hour()), 2),
            p.padded(u64::from(self.gregorian.minute()), 2),
            p.padded(u64::from(self.gregorian.second()), 2),
            p.number(u64::from(self.day)),
            locale.hijri_month_name(self.month).unwrap_or_default(),
            p.number(u64::from(self.year)),
            locale.era_suffix,
        )
    }

    /// The Sunday starting this date's week, at midnight, with its Hijri
    /// date re-derived.
    pub fn week_starting_day(&self) -> Result<Self, CalendarError> {
        let zone = self.gregorian.timezone();
        let back = i64::from(self.gregorian.weekday().num_days_from_sunday());
        let date = self.gregorian.date_naive() - TimeDelta::days(back);
        let parts = hijri::gregorian_to_hijri(date)?;
        Ok(Self::from_parts(parts, local_midnight(&zone, date)))
    }

    /// Day 1 of the current Hijri month, inverted through the table.
    ///
    /// The weekday is that of the inverted Gregorian date, not the weekday
    /// of `self`.
    pub fn month_starting_day(&self) -> Result<Self, CalendarError> {
        let date = hijri::hijri_to_gregorian(self.year, self.month, 1)?;
        Ok(Self::inverted(
            self.gregorian.timezone(),
            self.year,
            self.month,
            1,
            date,
        ))
    }

    /// Day 1 of the following Hijri month, inverted through the table.
    ///
    /// The year only advances when Dhu al-Hijjah wraps to Muharram.
    pub fn next_month_start(&self) -> Result<Self, CalendarError> {
        let month = self.month % 12 + 1;
        let year = if month == 1 { self.year + 1 } else { self.year };
        let date = hijri::hijri_to_gregorian(year, month, 1)?;
        Ok(Self::inverted(self.gregorian.timezone(), year, month, 1, date))
    }

    /// Midnight of the Gregorian day, keeping the Hijri label.
    pub fn current_day_start(&self) -> Self {
        self.day_time(0)
    }

    /// Midnight of the following Gregorian day, keeping the Hijri label.
    pub fn next_day_start(&self) -> Self {
        self.day_time(1)
    }

    fn day_time(&self, inc: i64) -> Self {
        let zone = self.gregorian.timezone();
        let date = self.gregorian.date_naive() + TimeDelta::days(inc);
        HijriDate {
            gregorian: local_midnight(&zone, date),
            ..self.clone()
        }
    }

    /// Whether `instant` falls strictly between this day's start and the
    /// next day's start.
    pub fn contains<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let instant = instant.with_timezone(&Utc);
        let start = self.current_day_start().gregorian.with_timezone(&Utc);
        let end = self.next_day_start().gregorian.with_timezone(&Utc);
        start < instant && instant < end
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Midnight of `date` on the local clock of `zone`.
fn local_midnight(zone: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt,
        // Midnight skipped by a transition; fall back to the KSA offset.
        None => (midnight.and_utc() - TimeDelta::hours(KSA_OFFSET_HOURS)).with_timezone(zone),
    }
}
