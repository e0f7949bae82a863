//! Holiday rule model and the encoded history of the Holiday Act.
//!
//! Japan's Public Holiday Law (祝日法, 1948) has been amended repeatedly:
//! holidays were added, renamed, moved to "happy Monday" floating dates,
//! and twice relocated outright for the Tokyo Olympics.  Rather than
//! hard-coding per-year conditionals, the law is modelled as an ordered
//! timeline of [`AmendmentRecord`]s; folding the timeline up to a year
//! yields that year's active rule set (see [`crate::timeline`]).
//!
//! The surfaced holiday names are the exact legal names from the Cabinet
//! Office data, including the generic 休日 label used for substitute and
//! citizens' holidays.

use crate::weekday::Weekday;
use jpcal_core::Year;

/// Year the Public Holiday Law came into force.  No date before this year
/// is a holiday.
pub const HOLIDAY_LAW_START_YEAR: Year = 1948;

/// Label under which substitute holidays (振替休日) and citizens' holidays
/// (国民の休日) are surfaced.  The Cabinet Office data does not distinguish
/// the two by name.
pub const DERIVED_HOLIDAY_NAME: &str = "休日";

/// Which equinox an [`HolidayRule::Equinox`] rule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquinoxKind {
    /// Spring equinox (March).
    Vernal,
    /// Autumn equinox (September).
    Autumnal,
}

/// A single holiday rule, as written in (an amendment of) the law.
///
/// The rule's `name` is the exact string surfaced to callers, and also the
/// key under which recurring rules are added, modified, and removed by
/// later amendments.  `Special` rules are one-off dates keyed by the date
/// itself and are never displaced by recurring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same calendar date every year the rule is active.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
        /// Legal holiday name.
        name: &'static str,
    },
    /// The n-th occurrence of a weekday in a month ("happy Monday").
    NthWeekday {
        /// Month (1–12).
        month: u8,
        /// Weekday of the occurrence.
        weekday: Weekday,
        /// Which occurrence (1-based).
        n: u8,
        /// Legal holiday name.
        name: &'static str,
    },
    /// Date computed by the equinox approximation.
    Equinox {
        /// Vernal (March) or autumnal (September).
        kind: EquinoxKind,
        /// Legal holiday name.
        name: &'static str,
    },
    /// Exactly one occurrence, tied to a specific date (imperial weddings,
    /// enthronement ceremonies, and the like).
    Special {
        /// Year of the occurrence.
        year: Year,
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
        /// Legal holiday name.
        name: &'static str,
    },
}

impl HolidayRule {
    /// The legal name this rule surfaces.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayRule::Fixed { name, .. }
            | HolidayRule::NthWeekday { name, .. }
            | HolidayRule::Equinox { name, .. }
            | HolidayRule::Special { name, .. } => name,
        }
    }
}

/// A holiday relocated by the Olympic special measures law, valid for the
/// record's year only.  The recurring rule with the same name is
/// suppressed for that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedHoliday {
    /// Name of the relocated holiday.
    pub name: &'static str,
    /// Relocated month.
    pub month: u8,
    /// Relocated day.
    pub day: u8,
}

/// One dated change to the holiday law.
///
/// Within a record, `add` is applied first, then `remove`, then `modify`;
/// across records, slice order is definitional.  All fields other than
/// `olympic_exception` are durable: they keep applying to every later
/// year.
#[derive(Debug, Clone, Copy)]
pub struct AmendmentRecord {
    /// First year the change applies to.
    pub effective_year: Year,
    /// Rules inserted (or overwritten) by name key.
    pub add: &'static [HolidayRule],
    /// Rule names deleted.
    pub remove: &'static [&'static str],
    /// Rules overwritten by name key.
    pub modify: &'static [HolidayRule],
    /// Start of the substitute-holiday policy, as (month, day) within the
    /// effective year.  Once set it is never unset.
    pub substitute_holiday_start: Option<(u8, u8)>,
    /// Enables the citizens'-holiday policy from the effective year on.
    pub citizens_holidays: bool,
    /// Olympic one-off relocations; applies to the effective year only.
    pub olympic_exception: &'static [MovedHoliday],
}

impl AmendmentRecord {
    pub(crate) const EMPTY: AmendmentRecord = AmendmentRecord {
        effective_year: 0,
        add: &[],
        remove: &[],
        modify: &[],
        substitute_holiday_start: None,
        citizens_holidays: false,
        olympic_exception: &[],
    };
}

/// The amendment history of the Public Holiday Law, 1948 to present,
/// ordered by effective year.
///
/// * 1948: the founding law: Autumnal Equinox Day, Culture Day, Labour
///   Thanksgiving Day
/// * 1949: New Year's Day, Coming of Age Day (Jan 15), Vernal Equinox
///   Day, the Emperor's Birthday (Apr 29), Constitution Memorial Day,
///   Children's Day
/// * 1959: Crown Prince Akihito's wedding
/// * 1966: Respect for the Aged Day (Sep 15), Health-Sports Day (Oct 10)
/// * 1967: National Foundation Day
/// * 1973: substitute holidays from April 12
/// * 1986: citizens' holidays
/// * 1989: Showa Emperor's funeral; Apr 29 becomes Greenery Day and the
///   Emperor's Birthday moves to Dec 23
/// * 1990: enthronement ceremony
/// * 1993: Crown Prince Naruhito's wedding
/// * 1996: Marine Day (Jul 20)
/// * 2000: happy Monday, first round: Coming of Age Day and
///   Health-Sports Day become floating Mondays
/// * 2003: happy Monday, second round: Marine Day and Respect for the
///   Aged Day
/// * 2007: Apr 29 becomes Showa Day, Greenery Day moves to May 4
/// * 2016: Mountain Day (Aug 11)
/// * 2019: the Heisei Emperor's Birthday lapses; Health-Sports Day is
///   listed under its transitional name; abdication and enthronement
///   one-offs
/// * 2020: the Emperor's Birthday returns on Feb 23, Sports Day gets its
///   final name, and Marine/Sports/Mountain Day are relocated for the
///   Tokyo Olympics
/// * 2021: Olympic relocations, second year
pub const LAW_AMENDMENTS: &[AmendmentRecord] = &[
    AmendmentRecord {
        effective_year: 1948,
        add: &[
            HolidayRule::Equinox {
                kind: EquinoxKind::Autumnal,
                name: "秋分の日",
            },
            HolidayRule::Fixed {
                month: 11,
                day: 3,
                name: "文化の日",
            },
            HolidayRule::Fixed {
                month: 11,
                day: 23,
                name: "勤労感謝の日",
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1949,
        add: &[
            HolidayRule::Fixed {
                month: 1,
                day: 1,
                name: "元日",
            },
            HolidayRule::Fixed {
                month: 1,
                day: 15,
                name: "成人の日",
            },
            HolidayRule::Equinox {
                kind: EquinoxKind::Vernal,
                name: "春分の日",
            },
            HolidayRule::Fixed {
                month: 4,
                day: 29,
                name: "天皇誕生日",
            },
            HolidayRule::Fixed {
                month: 5,
                day: 3,
                name: "憲法記念日",
            },
            HolidayRule::Fixed {
                month: 5,
                day: 5,
                name: "こどもの日",
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1959,
        add: &[HolidayRule::Special {
            year: 1959,
            month: 4,
            day: 10,
            name: "結婚の儀",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1966,
        add: &[
            HolidayRule::Fixed {
                month: 9,
                day: 15,
                name: "敬老の日",
            },
            HolidayRule::Fixed {
                month: 10,
                day: 10,
                name: "体育の日",
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1967,
        add: &[HolidayRule::Fixed {
            month: 2,
            day: 11,
            name: "建国記念の日",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1973,
        substitute_holiday_start: Some((4, 12)),
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1986,
        citizens_holidays: true,
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1989,
        add: &[
            HolidayRule::Fixed {
                month: 4,
                day: 29,
                name: "みどりの日",
            },
            HolidayRule::Special {
                year: 1989,
                month: 2,
                day: 24,
                name: "大喪の礼",
            },
        ],
        modify: &[HolidayRule::Fixed {
            month: 12,
            day: 23,
            name: "天皇誕生日",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1990,
        add: &[HolidayRule::Special {
            year: 1990,
            month: 11,
            day: 12,
            name: "即位礼正殿の儀",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1993,
        add: &[HolidayRule::Special {
            year: 1993,
            month: 6,
            day: 9,
            name: "結婚の儀",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 1996,
        add: &[HolidayRule::Fixed {
            month: 7,
            day: 20,
            name: "海の日",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2000,
        modify: &[
            HolidayRule::NthWeekday {
                month: 1,
                weekday: Weekday::Monday,
                n: 2,
                name: "成人の日",
            },
            HolidayRule::NthWeekday {
                month: 10,
                weekday: Weekday::Monday,
                n: 2,
                name: "体育の日",
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2003,
        modify: &[
            HolidayRule::NthWeekday {
                month: 7,
                weekday: Weekday::Monday,
                n: 3,
                name: "海の日",
            },
            HolidayRule::NthWeekday {
                month: 9,
                weekday: Weekday::Monday,
                n: 3,
                name: "敬老の日",
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2007,
        add: &[HolidayRule::Fixed {
            month: 4,
            day: 29,
            name: "昭和の日",
        }],
        modify: &[HolidayRule::Fixed {
            month: 5,
            day: 4,
            name: "みどりの日",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2016,
        add: &[HolidayRule::Fixed {
            month: 8,
            day: 11,
            name: "山の日",
        }],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2019,
        // The Cabinet Office lists the 2019 occurrence under the
        // transitional name before the 2020 rename.
        add: &[
            HolidayRule::NthWeekday {
                month: 10,
                weekday: Weekday::Monday,
                n: 2,
                name: "体育の日（スポーツの日）",
            },
            HolidayRule::Special {
                year: 2019,
                month: 5,
                day: 1,
                name: "休日",
            },
            HolidayRule::Special {
                year: 2019,
                month: 10,
                day: 22,
                name: "休日",
            },
        ],
        remove: &["天皇誕生日", "体育の日"],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2020,
        add: &[
            HolidayRule::Fixed {
                month: 2,
                day: 23,
                name: "天皇誕生日",
            },
            HolidayRule::NthWeekday {
                month: 10,
                weekday: Weekday::Monday,
                n: 2,
                name: "スポーツの日",
            },
        ],
        remove: &["体育の日（スポーツの日）"],
        olympic_exception: &[
            MovedHoliday {
                name: "海の日",
                month: 7,
                day: 23,
            },
            MovedHoliday {
                name: "スポーツの日",
                month: 7,
                day: 24,
            },
            MovedHoliday {
                name: "山の日",
                month: 8,
                day: 10,
            },
        ],
        ..AmendmentRecord::EMPTY
    },
    AmendmentRecord {
        effective_year: 2021,
        olympic_exception: &[
            MovedHoliday {
                name: "海の日",
                month: 7,
                day: 22,
            },
            MovedHoliday {
                name: "スポーツの日",
                month: 7,
                day: 23,
            },
            MovedHoliday {
                name: "山の日",
                month: 8,
                day: 8,
            },
        ],
        ..AmendmentRecord::EMPTY
    },
];
