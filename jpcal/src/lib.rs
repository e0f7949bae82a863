//! # jpcal
//!
//! Japanese national-holiday determination and business-day arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `jpcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jpcal = "0.1"
//! ```
//!
//! ```rust
//! use jpcal::{BusinessCalendar, CivilDate, JapanHolidays};
//!
//! let jp = JapanHolidays::new();
//!
//! let new_year = CivilDate::parse("2025-01-01")?;
//! assert_eq!(jp.holiday_name(new_year), Some("元日"));
//! assert!(!jp.is_business_day(new_year));
//!
//! // The substitute holiday after a Sunday Emperor's Birthday
//! let substitute = CivilDate::parse("2025-02-24")?;
//! assert_eq!(jp.holiday_name(substitute), Some("休日"));
//!
//! // Five business days after the year-end close
//! let start = CivilDate::parse("2024-12-31")?;
//! assert_eq!(
//!     jp.add_business_days(start, 5)?.to_string(),
//!     "2025-01-08"
//! );
//! # Ok::<(), jpcal::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types and error definitions.
pub use jpcal_core as core;

/// Holiday rules, equinox calculation, and calendars.
pub use jpcal_holidays as holidays;

pub use jpcal_core::{Error, Result, Year};
pub use jpcal_holidays::{
    autumnal_equinox_day, vernal_equinox_day, AmendmentTimeline, BusinessCalendar, CivilDate,
    Holiday, HolidayDateSet, HolidayLookup, HolidayNameTable, JapanHolidays, LookupCalendar,
    NamedHolidayLookup, Ruleset, Weekday,
};
