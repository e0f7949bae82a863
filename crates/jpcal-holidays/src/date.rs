//! `CivilDate` type.
//!
//! A calendar date in the single fixed civil timezone (UTC+9) that all
//! holiday rules are defined in.  Dates are represented as a serial number
//! of days: serial 1 = January 1, 1900, and the valid range is
//! 1900-01-01 to 2199-12-31.
//!
//! Instants (Unix timestamps) are mapped to civil dates by applying the
//! fixed UTC+9 offset; no other module performs timezone math.

use crate::weekday::Weekday;
use jpcal_core::errors::{Error, Result};
use jpcal_core::Year;

/// Fixed civil-timezone offset (UTC+9), in seconds.
const JST_OFFSET_SECS: i64 = 9 * 60 * 60;

/// Serial number of 1970-01-01, the Unix epoch.
const UNIX_EPOCH_SERIAL: i32 = serial_from_ymd(1970, 1, 1);

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(i32);

impl CivilDate {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: CivilDate = CivilDate(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: CivilDate = CivilDate(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(CivilDate(serial_from_ymd(year, month, day)))
    }

    /// Parse a date from a strict `YYYY-MM-DD` string.
    ///
    /// A string input is taken at face value as a civil date; the ambient
    /// timezone is irrelevant.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(Error::Date(format!("expected YYYY-MM-DD, got {text:?}")));
        }
        let field = |range: std::ops::Range<usize>| -> u16 {
            text[range]
                .parse()
                .expect("digits already validated above")
        };
        Self::from_ymd(field(0..4), field(5..7) as u8, field(8..10) as u8)
    }

    /// Map a Unix timestamp (seconds since 1970-01-01T00:00:00Z) to the
    /// civil date it falls on under the fixed UTC+9 offset.
    pub fn from_unix_timestamp(secs: i64) -> Result<Self> {
        let days = (secs + JST_OFFSET_SECS).div_euclid(86_400);
        let serial = UNIX_EPOCH_SERIAL as i64 + days;
        if serial < Self::MIN.0 as i64 || serial > Self::MAX.0 as i64 {
            return Err(Error::Date(format!(
                "timestamp {secs} outside the supported date range"
            )));
        }
        Ok(CivilDate(serial as i32))
    }

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial is out of the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(CivilDate(serial))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (January 1, 1900) was a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` steps backward).  Returns an error
    /// if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(CivilDate(serial))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        CivilDate(serial_from_ymd(y, m, last))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2025, 1)` returns the
    /// second Monday of January 2025 (2025-01-13).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = CivilDate::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days to advance from the 1st to reach the first occurrence
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        CivilDate::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for CivilDate {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for CivilDate {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<CivilDate> for CivilDate {
    type Output = i32;
    fn sub(self, rhs: CivilDate) -> i32 {
        self.0 - rhs.0
    }
}

impl std::str::FromStr for CivilDate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CivilDate({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Convert (year, month, day) to a serial number (serial 1 = 1900-01-01).
const fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year, plus leap days in [1900, year)
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in months 1..m for the current year
    serial += MONTH_OFFSET[(m - 1) as usize] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it
    let mut y = (serial / 365 + 1900) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = CivilDate::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, CivilDate::MIN);
        assert_eq!(CivilDate::from_ymd(2199, 12, 31).unwrap(), CivilDate::MAX);
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (1948, 7, 20),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2025, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = CivilDate::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(
            CivilDate::from_ymd(2024, 1, 1).unwrap().weekday(),
            Weekday::Monday
        );
        // 2025-02-23 is a Sunday
        assert_eq!(
            CivilDate::from_ymd(2025, 2, 23).unwrap().weekday(),
            Weekday::Sunday
        );
    }

    #[test]
    fn parse_valid() {
        let d = CivilDate::parse("2025-01-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 1, 1));
        assert_eq!("1973-04-12".parse::<CivilDate>().unwrap().day(), 12);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "2025-1-1",
            "2025/01/01",
            "20250101",
            "abcd-ef-gh",
            "2025-13-01",
            "2025-02-30",
            "2025-01-01T00:00:00",
            "",
            "+025-01-01",
        ] {
            assert!(CivilDate::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn unix_timestamp_applies_fixed_offset() {
        // Unix epoch is 09:00 on 1970-01-01 in civil time
        assert_eq!(
            CivilDate::from_unix_timestamp(0).unwrap(),
            CivilDate::parse("1970-01-01").unwrap()
        );
        // One second before 15:00Z on Dec 31 is still Dec 31 civil time...
        assert_eq!(
            CivilDate::from_unix_timestamp(1_735_657_199).unwrap(),
            CivilDate::parse("2024-12-31").unwrap()
        );
        // ...and 15:00Z exactly is midnight, Jan 1 civil time
        assert_eq!(
            CivilDate::from_unix_timestamp(1_735_657_200).unwrap(),
            CivilDate::parse("2025-01-01").unwrap()
        );
        // Negative offsets step back across the day boundary
        assert_eq!(
            CivilDate::from_unix_timestamp(-JST_OFFSET_SECS - 1).unwrap(),
            CivilDate::parse("1969-12-31").unwrap()
        );
    }

    #[test]
    fn display_is_iso() {
        let d = CivilDate::from_ymd(2025, 2, 3).unwrap();
        assert_eq!(d.to_string(), "2025-02-03");
    }

    #[test]
    fn arithmetic() {
        let d = CivilDate::parse("2023-01-01").unwrap();
        let d2 = d + 31;
        assert_eq!(d2.to_string(), "2023-02-01");
        assert_eq!(d2 - d, 31);
        assert_eq!((d2 - 1).to_string(), "2023-01-31");
        assert!(CivilDate::MAX.add_days(1).is_err());
        assert!(CivilDate::MIN.add_days(-1).is_err());
    }

    #[test]
    fn end_of_month() {
        let d = CivilDate::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day(), 29); // 2024 is a leap year
        let d = CivilDate::from_ymd(2025, 4, 1).unwrap();
        assert_eq!(d.end_of_month().day(), 30);
    }

    #[test]
    fn nth_weekday() {
        // 2nd Monday of January 2025 = January 13
        let d = CivilDate::nth_weekday(2, Weekday::Monday, 2025, 1).unwrap();
        assert_eq!(d, CivilDate::from_ymd(2025, 1, 13).unwrap());

        // 3rd Monday of September 2025 = September 15
        let d = CivilDate::nth_weekday(3, Weekday::Monday, 2025, 9).unwrap();
        assert_eq!(d, CivilDate::from_ymd(2025, 9, 15).unwrap());
        assert_eq!(d.weekday(), Weekday::Monday);
    }

    #[test]
    fn nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2025
        assert!(CivilDate::nth_weekday(5, Weekday::Wednesday, 2025, 2).is_err());
        assert!(CivilDate::nth_weekday(0, Weekday::Monday, 2025, 1).is_err());
    }
}
