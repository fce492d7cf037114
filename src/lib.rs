//! taqweem - KSA civil days and Umm al-Qura Hijri dates
//!
//! This crate answers two questions: which civil or Hijri day an instant
//! belongs to, and how to render a duration or a Hijri date as Arabic text.
//!
//! - [`CivilDay`] interprets an instant under the fixed UTC+3 KSA offset and
//!   exposes day, week and month boundaries.
//! - [`HijriDate`] pairs an Umm al-Qura date with its Gregorian instant in
//!   the `Asia/Riyadh` zone and navigates between days, weeks and months.
//! - [`duration_to_text`] renders the largest whole unit of a duration with
//!   Arabic number agreement.

#[macro_use]
mod logging;

pub mod civil;
pub mod date;
pub mod duration;
pub mod error;
pub mod hijri;
pub mod locale;
pub mod options;

pub use civil::CivilDay;
pub use date::HijriDate;
pub use duration::{duration_to_text, duration_to_text_with, Agreement, TimeUnit};
pub use error::CalendarError;
pub use hijri::HijriParts;
pub use locale::{Locale, Printer};
pub use options::{FormatOptions, Numerals};
