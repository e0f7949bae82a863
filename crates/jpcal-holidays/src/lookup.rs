//! Holiday lookup interfaces and backing stores.
//!
//! Consumers that ship a pre-generated holiday table (for example one
//! built from the Cabinet Office CSV) plug it in behind [`HolidayLookup`]
//! instead of the computed engine.  Two concrete stores are provided: a
//! date-only set and a date-to-name map.  [`JapanHolidays`] implements
//! the same interface, so calendar utilities work over either source.

use std::collections::{BTreeMap, BTreeSet};

use crate::date::CivilDate;
use crate::holidays::{Holiday, JapanHolidays};

/// Anything that can answer "is this date a holiday?".
pub trait HolidayLookup {
    /// Whether `date` is a holiday.
    fn contains(&self, date: CivilDate) -> bool;
}

/// A name-bearing holiday source: dates plus their legal names.
pub trait NamedHolidayLookup: HolidayLookup {
    /// The holiday name of `date`, if any.
    fn name_of(&self, date: CivilDate) -> Option<&str>;

    /// All known (date, name) entries, in ascending date order.
    fn entries(&self) -> Box<dyn Iterator<Item = (CivilDate, &str)> + '_>;

    /// All holidays from `start` to `end` inclusive, in ascending date
    /// order.  A reversed range yields an empty list.
    fn holidays_in_range(&self, start: CivilDate, end: CivilDate) -> Vec<Holiday> {
        self.entries()
            .filter(|(date, _)| *date >= start && *date <= end)
            .map(|(date, name)| Holiday {
                date,
                name: name.to_owned(),
            })
            .collect()
    }
}

// ── Backing stores ────────────────────────────────────────────────────────────

/// A date-only holiday store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayDateSet {
    dates: BTreeSet<CivilDate>,
}

impl HolidayDateSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday date.
    pub fn insert(&mut self, date: CivilDate) {
        self.dates.insert(date);
    }

    /// Number of stored dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<CivilDate> for HolidayDateSet {
    fn from_iter<I: IntoIterator<Item = CivilDate>>(iter: I) -> Self {
        HolidayDateSet {
            dates: iter.into_iter().collect(),
        }
    }
}

impl HolidayLookup for HolidayDateSet {
    fn contains(&self, date: CivilDate) -> bool {
        self.dates.contains(&date)
    }
}

/// A date-to-name holiday store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayNameTable {
    names: BTreeMap<CivilDate, String>,
}

impl HolidayNameTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday with its name, replacing any previous entry.
    pub fn insert(&mut self, date: CivilDate, name: impl Into<String>) {
        self.names.insert(date, name.into());
    }

    /// Number of stored holidays.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(CivilDate, S)> for HolidayNameTable {
    fn from_iter<I: IntoIterator<Item = (CivilDate, S)>>(iter: I) -> Self {
        HolidayNameTable {
            names: iter
                .into_iter()
                .map(|(date, name)| (date, name.into()))
                .collect(),
        }
    }
}

impl HolidayLookup for HolidayNameTable {
    fn contains(&self, date: CivilDate) -> bool {
        self.names.contains_key(&date)
    }
}

impl NamedHolidayLookup for HolidayNameTable {
    fn name_of(&self, date: CivilDate) -> Option<&str> {
        self.names.get(&date).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (CivilDate, &str)> + '_> {
        Box::new(self.names.iter().map(|(date, name)| (*date, name.as_str())))
    }
}

// ── Computed engine as a lookup ───────────────────────────────────────────────

impl HolidayLookup for JapanHolidays {
    fn contains(&self, date: CivilDate) -> bool {
        self.is_national_holiday(date)
    }
}
