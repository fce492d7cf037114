//! KSA civil day boundaries
//!
//! KSA time is UTC+3 all year round. A [`CivilDay`] stores its instant
//! already shifted by that offset, so the UTC wall-clock fields of the
//! stored value read as KSA civil time. The shift is applied once, at
//! construction.
//!
//! Two kinds of boundary are exposed:
//! - [`CivilDay::current_day_start`] and [`CivilDay::next_day_start`] return
//!   the local midnight in the stored (shifted) representation, which is what
//!   a display wants;
//! - [`CivilDay::current_day_start_utc`] and [`CivilDay::next_day_start_utc`]
//!   undo the shift and return true UTC instants, safe to compare against
//!   instants from elsewhere. [`CivilDay::contains`] uses these.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// Offset of KSA civil time from UTC, in hours.
pub const KSA_OFFSET_HOURS: i64 = 3;

fn ksa_offset() -> TimeDelta {
    TimeDelta::hours(KSA_OFFSET_HOURS)
}

/// An instant interpreted as belonging to the KSA civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDay(DateTime<Utc>);

impl CivilDay {
    /// The civil day of the current instant.
    pub fn now() -> Self {
        Self::of(&Utc::now())
    }

    /// The civil day `instant` falls in, whatever zone it carries.
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        CivilDay(instant.with_timezone(&Utc) + ksa_offset())
    }

    /// The stored instant, shifted so its fields read KSA civil time.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The civil date.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// The civil date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    /// The Sunday on or before the civil date, as `YYYY-MM-DD`.
    pub fn week_date_string(&self) -> String {
        let date = self.date();
        let back = i64::from(date.weekday().num_days_from_sunday());
        (date - TimeDelta::days(back)).format("%Y-%m-%d").to_string()
    }

    /// The first day of the civil month, as `YYYY-MM-DD`.
    pub fn month_date_string(&self) -> String {
        let date = self.date();
        // Day 1 exists in every month.
        let first = date.with_day(1).unwrap_or(date);
        first.format("%Y-%m-%d").to_string()
    }

    /// Local midnight starting this civil day, in the shifted representation.
    pub fn current_day_start(&self) -> DateTime<Utc> {
        self.local_midnight(0)
    }

    /// Local midnight starting the next civil day, in the shifted
    /// representation.
    pub fn next_day_start(&self) -> DateTime<Utc> {
        self.local_midnight(1)
    }

    /// The true UTC instant at which this civil day starts.
    pub fn current_day_start_utc(&self) -> DateTime<Utc> {
        self.local_midnight(0) - ksa_offset()
    }

    /// The true UTC instant at which the next civil day starts.
    pub fn next_day_start_utc(&self) -> DateTime<Utc> {
        self.local_midnight(1) - ksa_offset()
    }

    /// Whether `instant` falls strictly inside this civil day.
    ///
    /// Both boundaries are excluded.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);
        self.current_day_start_utc() < instant && instant < self.next_day_start_utc()
    }

    fn local_midnight(&self, inc: i64) -> DateTime<Utc> {
        let date = self.date() + TimeDelta::days(inc);
        date.and_time(NaiveTime::MIN).and_utc()
    }
}

impl fmt::Display for CivilDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date_string())
    }
}
