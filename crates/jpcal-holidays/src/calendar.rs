//! Business-day arithmetic.
//!
//! [`BusinessCalendar`] derives every business-day operation from a
//! single `is_business_day` predicate: nearest-day searches, stepping by
//! n business days, inclusive counting, and month/week end lookups.  All
//! walks are bounded iterative loops.
//!
//! The computed engine ([`JapanHolidays`]) and the table-backed
//! [`LookupCalendar`] both implement it.

use crate::date::CivilDate;
use crate::holidays::JapanHolidays;
use crate::lookup::HolidayLookup;
use crate::weekday::Weekday;
use jpcal_core::errors::Result;

/// Calendar arithmetic over an `is_business_day` predicate.
///
/// The provided methods return an error only when a step would leave the
/// supported date range.
pub trait BusinessCalendar {
    /// Whether `date` is a business day.
    fn is_business_day(&self, date: CivilDate) -> bool;

    /// The first business day strictly after `date`.
    fn next_business_day(&self, date: CivilDate) -> Result<CivilDate> {
        let mut cursor = date.add_days(1)?;
        while !self.is_business_day(cursor) {
            cursor = cursor.add_days(1)?;
        }
        Ok(cursor)
    }

    /// The last business day strictly before `date`.
    fn previous_business_day(&self, date: CivilDate) -> Result<CivilDate> {
        let mut cursor = date.add_days(-1)?;
        while !self.is_business_day(cursor) {
            cursor = cursor.add_days(-1)?;
        }
        Ok(cursor)
    }

    /// The date `n` business days after `date` (before, for negative
    /// `n`).  `n == 0` returns `date` unchanged, whether or not it is a
    /// business day.
    fn add_business_days(&self, date: CivilDate, n: i32) -> Result<CivilDate> {
        let step = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        let mut cursor = date;
        while remaining > 0 {
            cursor = cursor.add_days(step)?;
            if self.is_business_day(cursor) {
                remaining -= 1;
            }
        }
        Ok(cursor)
    }

    /// The date `n` business days before `date`.
    fn sub_business_days(&self, date: CivilDate, n: i32) -> Result<CivilDate> {
        self.add_business_days(date, -n)
    }

    /// Number of business days from `start` to `end`, both inclusive.
    /// Negative when `start > end`.
    fn count_business_days(&self, start: CivilDate, end: CivilDate) -> i32 {
        let (lo, hi, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };
        let mut count = 0;
        let mut cursor = lo;
        loop {
            if self.is_business_day(cursor) {
                count += 1;
            }
            if cursor == hi {
                break;
            }
            cursor = cursor + 1;
        }
        sign * count
    }

    /// The last business day of the month containing `date`.
    fn last_business_day_of_month(&self, date: CivilDate) -> Result<CivilDate> {
        let end = date.end_of_month();
        if self.is_business_day(end) {
            Ok(end)
        } else {
            self.previous_business_day(end)
        }
    }

    /// The last business day of the week containing `date`.
    ///
    /// Weeks start on Monday and the candidate is that week's Friday; a
    /// Saturday resolves to the Friday just past, a Sunday to the Friday
    /// of the week ahead.
    fn last_business_day_of_week(&self, date: CivilDate) -> Result<CivilDate> {
        let days_until_friday = match date.weekday() {
            Weekday::Sunday => 5,
            wd => 5 - wd.ordinal() as i32,
        };
        let friday = date.add_days(days_until_friday)?;
        if self.is_business_day(friday) {
            Ok(friday)
        } else {
            self.previous_business_day(friday)
        }
    }
}

impl BusinessCalendar for JapanHolidays {
    fn is_business_day(&self, date: CivilDate) -> bool {
        JapanHolidays::is_business_day(self, date)
    }
}

/// A business calendar over an external holiday store: weekends plus
/// whatever dates the lookup contains.
#[derive(Debug, Clone, Default)]
pub struct LookupCalendar<L> {
    lookup: L,
}

impl<L: HolidayLookup> LookupCalendar<L> {
    /// Calendar over the given holiday store.
    pub fn new(lookup: L) -> Self {
        LookupCalendar { lookup }
    }

    /// The underlying store.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: HolidayLookup> BusinessCalendar for LookupCalendar<L> {
    fn is_business_day(&self, date: CivilDate) -> bool {
        !date.weekday().is_weekend() && !self.lookup.contains(date)
    }
}
