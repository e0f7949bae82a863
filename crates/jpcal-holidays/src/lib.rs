//! # jpcal-holidays
//!
//! Japanese national-holiday determination: the holiday rules of the
//! Public Holiday Law (1948–present) modelled as an amendment timeline,
//! equinox-day calculation, substitute/citizens'-holiday derivation, and
//! business-day arithmetic on top.
//!
//! ```
//! use jpcal_holidays::{CivilDate, JapanHolidays};
//!
//! let jp = JapanHolidays::new();
//! let day = CivilDate::parse("2025-01-01")?;
//! assert_eq!(jp.holiday_name(day), Some("元日"));
//! # Ok::<(), jpcal_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day arithmetic over an `is_business_day` predicate.
pub mod calendar;

/// `CivilDate` type.
pub mod date;

/// Equinox day approximation.
pub mod equinox;

/// Holiday determination engine.
pub mod holidays;

/// Holiday lookup interfaces and backing stores.
pub mod lookup;

/// Holiday rule model and the encoded legal history.
pub mod rules;

/// Amendment-timeline folding and the per-year ruleset cache.
pub mod timeline;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{BusinessCalendar, LookupCalendar};
pub use date::CivilDate;
pub use equinox::{autumnal_equinox_day, vernal_equinox_day};
pub use holidays::{Holiday, JapanHolidays};
pub use lookup::{HolidayDateSet, HolidayLookup, HolidayNameTable, NamedHolidayLookup};
pub use rules::{AmendmentRecord, EquinoxKind, HolidayRule, MovedHoliday, LAW_AMENDMENTS};
pub use timeline::{AmendmentTimeline, Ruleset};
pub use weekday::Weekday;
