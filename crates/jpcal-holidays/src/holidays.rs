//! Holiday determination.
//!
//! [`JapanHolidays`] answers, for any civil date, whether it is a national
//! holiday and under which legal name.  Primary holidays come from the
//! year's folded [`Ruleset`](crate::timeline::Ruleset); two derived
//! categories are computed from the primary set:
//!
//! * **substitute holidays** (振替休日) — a weekday granted because a
//!   holiday fell on a Sunday, possibly at the end of a chain of
//!   consecutive holidays;
//! * **citizens' holidays** (国民の休日) — a non-holiday weekday
//!   sandwiched between two holidays.
//!
//! Both derived categories surface under the generic 休日 label, as in
//! the Cabinet Office data.

use crate::date::CivilDate;
use crate::equinox::{autumnal_equinox_day, vernal_equinox_day};
use crate::rules::{EquinoxKind, HolidayRule, DERIVED_HOLIDAY_NAME, HOLIDAY_LAW_START_YEAR};
use crate::timeline::AmendmentTimeline;
use crate::weekday::Weekday;

/// A dated holiday, as returned by range queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// The date the holiday falls on.
    pub date: CivilDate,
    /// The legal holiday name.
    pub name: String,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

/// The assembled holiday-determination engine.
///
/// Owns the amendment timeline (and with it the per-year ruleset cache),
/// so constructing one instance at startup and sharing it amortizes the
/// folding work.  All queries take `&self`.
#[derive(Debug, Default)]
pub struct JapanHolidays {
    timeline: AmendmentTimeline,
}

impl JapanHolidays {
    /// Engine over the actual legal history.
    pub fn new() -> Self {
        JapanHolidays {
            timeline: AmendmentTimeline::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// The holiday name of `date`, or `None` if it is not a holiday.
    ///
    /// Primary holidays surface their legal name; substitute and
    /// citizens' holidays surface 休日.  Dates before the Holiday Law's
    /// enactment year (1948) are never holidays.
    pub fn holiday_name(&self, date: CivilDate) -> Option<&'static str> {
        if date.year() < HOLIDAY_LAW_START_YEAR {
            return None;
        }
        if let Some(name) = self.defined_holiday_name(date) {
            return Some(name);
        }
        // Substitute takes documented precedence, though the two cannot
        // both hold for one date
        if self.is_substitute_holiday(date) || self.is_citizens_holiday(date) {
            return Some(DERIVED_HOLIDAY_NAME);
        }
        None
    }

    /// Whether `date` is a national holiday (primary, substitute, or
    /// citizens').
    pub fn is_national_holiday(&self, date: CivilDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Whether `date` falls on a Saturday or Sunday, independent of
    /// holiday status.
    pub fn is_weekend(&self, date: CivilDate) -> bool {
        date.weekday().is_weekend()
    }

    /// Whether `date` is a day off: a weekend day or a national holiday.
    pub fn is_holiday(&self, date: CivilDate) -> bool {
        self.is_weekend(date) || self.is_national_holiday(date)
    }

    /// Whether `date` is a business day (neither weekend nor holiday).
    pub fn is_business_day(&self, date: CivilDate) -> bool {
        !self.is_holiday(date)
    }

    /// All holidays from `start` to `end` inclusive, in ascending date
    /// order.  A reversed range yields an empty list.
    pub fn holidays_in_range(&self, start: CivilDate, end: CivilDate) -> Vec<Holiday> {
        let mut found = Vec::new();
        let mut cursor = start;
        while cursor <= end {
            if let Some(name) = self.holiday_name(cursor) {
                found.push(Holiday {
                    date: cursor,
                    name: name.to_owned(),
                });
            }
            cursor = match cursor.add_days(1) {
                Ok(next) => next,
                Err(_) => break,
            };
        }
        found
    }

    // ── Primary resolution ────────────────────────────────────────────────────

    /// The name of the primary ("defined") holiday on `date`, excluding
    /// substitute and citizens' holidays.
    fn defined_holiday_name(&self, date: CivilDate) -> Option<&'static str> {
        let year = date.year();
        let ruleset = self.timeline.ruleset_for_year(year);

        // One-off holidays always win
        if let Some(name) = ruleset.specials.get(&date) {
            return Some(*name);
        }

        // Olympic relocations: the moved date matches, the usual date is
        // suppressed below
        if let Some(moved) = ruleset.olympic_exception {
            for entry in moved {
                if date.month() == entry.month && date.day() == entry.day {
                    return Some(entry.name);
                }
            }
        }

        for rule in ruleset.rules.values() {
            if ruleset.is_moved_by_olympics(rule.name()) {
                continue;
            }
            let matched = match *rule {
                HolidayRule::Fixed { month, day, .. } => {
                    date.month() == month && date.day() == day
                }
                HolidayRule::NthWeekday {
                    month, weekday, n, ..
                } => {
                    date.month() == month
                        && CivilDate::nth_weekday(n, weekday, year, month)
                            .is_ok_and(|nth| nth == date)
                }
                HolidayRule::Equinox { kind, .. } => match kind {
                    EquinoxKind::Vernal => {
                        date.month() == 3 && date.day() == vernal_equinox_day(year)
                    }
                    EquinoxKind::Autumnal => {
                        date.month() == 9 && date.day() == autumnal_equinox_day(year)
                    }
                },
                // Specials live in the dedicated map
                HolidayRule::Special { .. } => false,
            };
            if matched {
                return Some(rule.name());
            }
        }
        None
    }

    // ── Derived resolution ────────────────────────────────────────────────────

    /// Whether `date` is a substitute holiday (振替休日).
    ///
    /// A non-Sunday is a substitute holiday when walking backward
    /// day-by-day over defined holidays reaches a Sunday that is itself a
    /// defined holiday.  The walk requires every intervening day to be a
    /// holiday, which handles chains of consecutive holidays starting on
    /// a Sunday.
    pub fn is_substitute_holiday(&self, date: CivilDate) -> bool {
        let ruleset = self.timeline.ruleset_for_year(date.year());
        let Some(start) = ruleset.substitute_holiday_start else {
            return false;
        };
        if date < start {
            return false;
        }
        if date.weekday() == Weekday::Sunday {
            return false;
        }

        // Iterative walk: chains are at most a handful of days long
        let mut cursor = date - 1;
        while cursor.weekday() != Weekday::Sunday {
            if self.defined_holiday_name(cursor).is_none() {
                return false;
            }
            cursor = cursor - 1;
        }
        // Reaching a Sunday is not enough; it must be a holiday itself
        self.defined_holiday_name(cursor).is_some()
    }

    /// Whether `date` is a citizens' holiday (国民の休日).
    ///
    /// A non-Sunday that is not itself a defined holiday, sandwiched
    /// between two defined holidays.
    pub fn is_citizens_holiday(&self, date: CivilDate) -> bool {
        let ruleset = self.timeline.ruleset_for_year(date.year());
        if !ruleset.citizens_holidays_enabled {
            return false;
        }
        if date.weekday() == Weekday::Sunday {
            return false;
        }
        if self.defined_holiday_name(date).is_some() {
            return false;
        }
        let neighbor_is_holiday = |offset: i32| {
            date.add_days(offset)
                .map(|d| self.defined_holiday_name(d).is_some())
                .unwrap_or(false)
        };
        neighbor_is_holiday(-1) && neighbor_is_holiday(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CivilDate {
        CivilDate::from_ymd(y, m, d).unwrap()
    }

    fn engine() -> JapanHolidays {
        JapanHolidays::new()
    }

    #[test]
    fn fixed_rules_by_era() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(1948, 11, 3)), Some("文化の日"));
        assert_eq!(jp.holiday_name(date(2025, 1, 1)), Some("元日"));
        // April 29 changes meaning across eras
        assert_eq!(jp.holiday_name(date(1988, 4, 29)), Some("天皇誕生日"));
        assert_eq!(jp.holiday_name(date(1989, 4, 29)), Some("みどりの日"));
        assert_eq!(jp.holiday_name(date(2007, 4, 29)), Some("昭和の日"));
        // Greenery Day moved to May 4 in 2007; before that the date was
        // only a sandwiched citizens' holiday
        assert_eq!(jp.holiday_name(date(2007, 5, 4)), Some("みどりの日"));
        assert_eq!(jp.holiday_name(date(2006, 5, 4)), Some("休日"));
    }

    #[test]
    fn rules_do_not_apply_before_enactment() {
        let jp = engine();
        // New Year's Day only became a legal holiday in 1949
        assert_eq!(jp.holiday_name(date(1948, 1, 1)), None);
        assert_eq!(jp.holiday_name(date(1949, 1, 1)), Some("元日"));
        assert_eq!(jp.holiday_name(date(1965, 10, 10)), None);
        assert_eq!(jp.holiday_name(date(1966, 10, 10)), Some("体育の日"));
    }

    #[test]
    fn nothing_before_the_law() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(1947, 11, 3)), None);
        assert_eq!(jp.holiday_name(date(1947, 9, 23)), None);
        assert!(!jp.is_national_holiday(date(1900, 1, 1)));
    }

    #[test]
    fn happy_monday_transition() {
        let jp = engine();
        // Fixed Jan 15 through 1999
        assert_eq!(jp.holiday_name(date(1999, 1, 15)), Some("成人の日"));
        // 2nd Monday from 2000 (Jan 10 that year); Jan 15 no longer matches
        assert_eq!(jp.holiday_name(date(2000, 1, 10)), Some("成人の日"));
        assert_eq!(jp.holiday_name(date(2000, 1, 15)), None);
        // Marine Day: fixed Jul 20 through 2002, 3rd Monday from 2003
        assert_eq!(jp.holiday_name(date(2002, 7, 20)), Some("海の日"));
        assert_eq!(jp.holiday_name(date(2003, 7, 21)), Some("海の日"));
        assert_eq!(jp.holiday_name(date(2003, 7, 20)), None);
    }

    #[test]
    fn equinox_holidays() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(2025, 3, 20)), Some("春分の日"));
        assert_eq!(jp.holiday_name(date(2025, 3, 21)), None);
        assert_eq!(jp.holiday_name(date(2024, 9, 22)), Some("秋分の日"));
        assert_eq!(jp.holiday_name(date(2025, 9, 23)), Some("秋分の日"));
        // 1979 autumnal equinox fell on Sep 24
        assert_eq!(jp.holiday_name(date(1979, 9, 24)), Some("秋分の日"));
        assert_eq!(jp.holiday_name(date(1979, 9, 23)), None);
    }

    #[test]
    fn one_off_specials() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(1959, 4, 10)), Some("結婚の儀"));
        assert_eq!(jp.holiday_name(date(1989, 2, 24)), Some("大喪の礼"));
        assert_eq!(jp.holiday_name(date(1990, 11, 12)), Some("即位礼正殿の儀"));
        assert_eq!(jp.holiday_name(date(1993, 6, 9)), Some("結婚の儀"));
        // One-off only: same date other years is nothing
        assert_eq!(jp.holiday_name(date(1960, 4, 10)), None);
    }

    #[test]
    fn olympic_relocation_2020() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(2020, 7, 23)), Some("海の日"));
        assert_eq!(jp.holiday_name(date(2020, 7, 24)), Some("スポーツの日"));
        assert_eq!(jp.holiday_name(date(2020, 8, 10)), Some("山の日"));
        // The usual dates are suppressed that year
        assert_eq!(jp.holiday_name(date(2020, 7, 20)), None);
        assert_eq!(jp.holiday_name(date(2020, 8, 11)), None);
        assert_eq!(jp.holiday_name(date(2020, 10, 12)), None);
    }

    #[test]
    fn olympic_relocation_2021() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(2021, 7, 22)), Some("海の日"));
        assert_eq!(jp.holiday_name(date(2021, 7, 23)), Some("スポーツの日"));
        assert_eq!(jp.holiday_name(date(2021, 8, 8)), Some("山の日"));
        // Aug 8, 2021 was a Sunday; Aug 9 is its substitute
        assert_eq!(jp.holiday_name(date(2021, 8, 9)), Some("休日"));
        assert_eq!(jp.holiday_name(date(2021, 7, 19)), None);
        assert_eq!(jp.holiday_name(date(2021, 8, 11)), None);
        assert_eq!(jp.holiday_name(date(2021, 10, 11)), None);
        // Back to normal the year after
        assert_eq!(jp.holiday_name(date(2022, 7, 18)), Some("海の日"));
        assert_eq!(jp.holiday_name(date(2022, 10, 10)), Some("スポーツの日"));
    }

    #[test]
    fn sports_day_naming_history() {
        let jp = engine();
        assert_eq!(jp.holiday_name(date(1999, 10, 10)), Some("体育の日"));
        assert_eq!(jp.holiday_name(date(2018, 10, 8)), Some("体育の日"));
        assert_eq!(
            jp.holiday_name(date(2019, 10, 14)),
            Some("体育の日（スポーツの日）")
        );
        assert_eq!(jp.holiday_name(date(2022, 10, 10)), Some("スポーツの日"));
    }

    #[test]
    fn substitute_holiday_simple() {
        let jp = engine();
        // 2025-02-23 (Emperor's Birthday) is a Sunday; Monday is off
        assert!(jp.is_substitute_holiday(date(2025, 2, 24)));
        assert_eq!(jp.holiday_name(date(2025, 2, 24)), Some("休日"));
        // The Sunday itself keeps its own name
        assert_eq!(jp.holiday_name(date(2025, 2, 23)), Some("天皇誕生日"));
    }

    #[test]
    fn substitute_holiday_chain() {
        let jp = engine();
        // 2020 Golden Week: May 3 (Sun) 憲法記念日, May 4 みどりの日,
        // May 5 こどもの日 — the walk from May 6 reaches the Sunday
        assert_eq!(jp.holiday_name(date(2020, 5, 6)), Some("休日"));
        // May 7 hits a non-holiday (May 6 is only a substitute) first
        assert!(!jp.is_substitute_holiday(date(2020, 5, 7)));
    }

    #[test]
    fn substitute_holiday_needs_sunday_holiday() {
        let jp = engine();
        // 2025-11-03 is a Monday holiday (文化の日); the preceding Sunday
        // is plain, so Tuesday is not a substitute
        assert!(!jp.is_substitute_holiday(date(2025, 11, 4)));
        // A Monday after a plain Sunday is not a substitute either
        assert!(!jp.is_substitute_holiday(date(2025, 6, 2)));
    }

    #[test]
    fn substitute_holiday_start_date() {
        let jp = engine();
        // Feb 11, 1973 fell on a Sunday, but the policy begins Apr 12
        assert!(!jp.is_substitute_holiday(date(1973, 2, 12)));
        assert_eq!(jp.holiday_name(date(1973, 2, 12)), None);
        // Apr 29, 1973 (Sunday) produced the first substitute holiday
        assert!(jp.is_substitute_holiday(date(1973, 4, 30)));
        assert_eq!(jp.holiday_name(date(1973, 4, 30)), Some("休日"));
        // Before the policy existed at all
        assert!(!jp.is_substitute_holiday(date(1971, 5, 4)));
    }

    #[test]
    fn citizens_holiday_silver_week() {
        let jp = engine();
        // 2009-09-21 敬老の日, 09-23 秋分の日, 09-22 sandwiched
        assert!(jp.is_citizens_holiday(date(2009, 9, 22)));
        assert_eq!(jp.holiday_name(date(2009, 9, 22)), Some("休日"));
        // Not in a year where the two are further apart
        assert!(!jp.is_citizens_holiday(date(2010, 9, 22)));
    }

    #[test]
    fn citizens_holiday_golden_week_history() {
        let jp = engine();
        // 1988-05-04 (Wednesday) between 憲法記念日 and こどもの日
        assert!(jp.is_citizens_holiday(date(1988, 5, 4)));
        assert_eq!(jp.holiday_name(date(1988, 5, 4)), Some("休日"));
        // Policy did not exist in 1985
        assert!(!jp.is_citizens_holiday(date(1985, 5, 4)));
        assert_eq!(jp.holiday_name(date(1985, 5, 4)), None);
    }

    #[test]
    fn citizens_holiday_2019_enthronement() {
        let jp = engine();
        // 2019-05-01 was a one-off holiday, making Apr 30 and May 2
        // sandwiched weekdays
        assert_eq!(jp.holiday_name(date(2019, 5, 1)), Some("休日"));
        assert_eq!(jp.holiday_name(date(2019, 4, 30)), Some("休日"));
        assert_eq!(jp.holiday_name(date(2019, 5, 2)), Some("休日"));
        assert!(jp.is_citizens_holiday(date(2019, 4, 30)));
        assert!(jp.is_citizens_holiday(date(2019, 5, 2)));
        // 2019-05-06: こどもの日 fell on Sunday, Monday is a substitute
        assert_eq!(jp.holiday_name(date(2019, 5, 6)), Some("休日"));
        assert!(jp.is_substitute_holiday(date(2019, 5, 6)));
    }

    #[test]
    fn day_off_predicates() {
        let jp = engine();
        let saturday = date(2025, 1, 4);
        let monday_holiday = date(2025, 1, 13);
        let plain_monday = date(2025, 1, 6);
        assert!(jp.is_weekend(saturday));
        assert!(!jp.is_national_holiday(saturday));
        assert!(jp.is_holiday(saturday));
        assert!(!jp.is_business_day(saturday));
        assert!(jp.is_holiday(monday_holiday));
        assert!(!jp.is_weekend(monday_holiday));
        assert!(jp.is_business_day(plain_monday));
    }

    #[test]
    fn range_query_early_2025() {
        let jp = engine();
        let result = jp.holidays_in_range(date(2025, 1, 1), date(2025, 2, 28));
        let expected = [
            (date(2025, 1, 1), "元日"),
            (date(2025, 1, 13), "成人の日"),
            (date(2025, 2, 11), "建国記念の日"),
            (date(2025, 2, 23), "天皇誕生日"),
            (date(2025, 2, 24), "休日"),
        ];
        assert_eq!(result.len(), expected.len());
        for (holiday, (d, name)) in result.iter().zip(expected) {
            assert_eq!(holiday.date, d);
            assert_eq!(holiday.name, name);
        }
    }

    #[test]
    fn range_query_reversed_is_empty() {
        let jp = engine();
        assert!(jp
            .holidays_in_range(date(2025, 2, 1), date(2025, 1, 1))
            .is_empty());
    }

    #[test]
    fn range_query_single_day() {
        let jp = engine();
        let result = jp.holidays_in_range(date(2025, 1, 1), date(2025, 1, 1));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "元日");
        assert_eq!(result[0].to_string(), "2025-01-01 元日");
    }
}
