//! Amendment-timeline folding and the per-year ruleset cache.
//!
//! [`AmendmentTimeline::ruleset_for_year`] folds every amendment with
//! `effective_year <= year` into a [`Ruleset`] — the snapshot of rules and
//! policies active in that year.  Holiday law for a past year never
//! changes once the timeline is fixed, so results are memoized
//! indefinitely in a cache owned by the timeline instance.  The cache is
//! populated lazily and monotonically; the backfill-on-miss write is the
//! only mutation, guarded by a read-mostly lock.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::date::CivilDate;
use crate::rules::{AmendmentRecord, HolidayRule, MovedHoliday, LAW_AMENDMENTS};
use jpcal_core::Year;

/// The resolved, year-specific snapshot of active holiday rules and
/// policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Recurring rules active in the year, keyed by legal name.
    pub rules: BTreeMap<&'static str, HolidayRule>,
    /// All one-off holidays declared so far, keyed by date.  Specials
    /// accumulate over the timeline and are never removed.
    pub specials: BTreeMap<CivilDate, &'static str>,
    /// First date the substitute-holiday policy applies to, once
    /// introduced.
    pub substitute_holiday_start: Option<CivilDate>,
    /// Whether the citizens'-holiday policy is in force.
    pub citizens_holidays_enabled: bool,
    /// Olympic relocations.  Non-`None` only for the two years a
    /// relocation law applied to; this is the one year-exact field.
    pub olympic_exception: Option<&'static [MovedHoliday]>,
}

impl Ruleset {
    fn empty() -> Self {
        Ruleset {
            rules: BTreeMap::new(),
            specials: BTreeMap::new(),
            substitute_holiday_start: None,
            citizens_holidays_enabled: false,
            olympic_exception: None,
        }
    }

    /// Whether the named rule is relocated (and therefore suppressed at
    /// its usual date) this year.
    pub fn is_moved_by_olympics(&self, name: &str) -> bool {
        self.olympic_exception
            .is_some_and(|moved| moved.iter().any(|m| m.name == name))
    }

    fn apply(&mut self, rule: &HolidayRule) {
        match *rule {
            HolidayRule::Special {
                year,
                month,
                day,
                name,
            } => {
                let date = CivilDate::from_ymd(year, month, day)
                    .expect("amendment timeline holds valid dates");
                self.specials.insert(date, name);
            }
            _ => {
                self.rules.insert(rule.name(), *rule);
            }
        }
    }
}

/// The ordered history of holiday-law amendments, plus the per-year
/// ruleset memo cache.
#[derive(Debug)]
pub struct AmendmentTimeline {
    records: &'static [AmendmentRecord],
    cache: RwLock<BTreeMap<Year, Arc<Ruleset>>>,
}

impl Default for AmendmentTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AmendmentTimeline {
    /// Timeline of the actual legal history ([`LAW_AMENDMENTS`]).
    pub fn new() -> Self {
        Self::with_records(LAW_AMENDMENTS)
    }

    /// Timeline over an arbitrary record slice.
    pub(crate) fn with_records(records: &'static [AmendmentRecord]) -> Self {
        AmendmentTimeline {
            records,
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    /// The ruleset active in `year`, memoized.
    pub fn ruleset_for_year(&self, year: Year) -> Arc<Ruleset> {
        if let Some(cached) = self
            .cache
            .read()
            .expect("ruleset cache poisoned")
            .get(&year)
        {
            return Arc::clone(cached);
        }
        let folded = Arc::new(self.fold(year));
        let mut cache = self.cache.write().expect("ruleset cache poisoned");
        Arc::clone(cache.entry(year).or_insert(folded))
    }

    fn fold(&self, year: Year) -> Ruleset {
        let mut ruleset = Ruleset::empty();
        for record in self.records {
            if record.effective_year > year {
                break;
            }
            for rule in record.add {
                ruleset.apply(rule);
            }
            for name in record.remove {
                ruleset.rules.remove(*name);
            }
            for rule in record.modify {
                ruleset.apply(rule);
            }
            if let Some((month, day)) = record.substitute_holiday_start {
                if ruleset.substitute_holiday_start.is_none() {
                    ruleset.substitute_holiday_start = Some(
                        CivilDate::from_ymd(record.effective_year, month, day)
                            .expect("amendment timeline holds valid dates"),
                    );
                }
            }
            if record.citizens_holidays {
                ruleset.citizens_holidays_enabled = true;
            }
            if record.effective_year == year && !record.olympic_exception.is_empty() {
                ruleset.olympic_exception = Some(record.olympic_exception);
            }
        }
        ruleset
    }
}
