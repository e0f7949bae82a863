//! Equinox day calculation.
//!
//! The vernal and autumnal equinox holidays fall on astronomically
//! determined dates.  This module implements the National Astronomical
//! Observatory's piecewise linear approximation, valid for 1900–2099:
//!
//! ```text
//! day = floor(base + 0.242194 * (year - 1980) - floor((year - 1980) / 4))
//! ```
//!
//! with a base constant that differs for years up to 1979.  Outside
//! the valid range the functions return fixed fallback days (21 for March,
//! 23 for September); these are known-inaccurate placeholders, not errors.
//!
//! Every equinox holiday and every derived-holiday check in March and
//! September depends on the exact output, including the floor semantics
//! for negative intermediate values before 1980.

use jpcal_core::Year;

/// Day-of-month of the vernal equinox in March.
///
/// Valid for 1900–2099; returns 21 outside that range.
pub fn vernal_equinox_day(year: Year) -> u8 {
    if !(1900..=2099).contains(&year) {
        return 21;
    }
    let base = if year <= 1979 { 20.8357 } else { 20.8431 };
    equinox_day(base, year)
}

/// Day-of-month of the autumnal equinox in September.
///
/// Valid for 1900–2099; returns 23 outside that range.
pub fn autumnal_equinox_day(year: Year) -> u8 {
    if !(1900..=2099).contains(&year) {
        return 23;
    }
    let base = if year <= 1979 { 23.2588 } else { 23.2488 };
    equinox_day(base, year)
}

fn equinox_day(base: f64, year: Year) -> u8 {
    let t = f64::from(year) - 1980.0;
    // floor, not truncation: t/4 is negative before 1980
    (base + 0.242194 * t - (t / 4.0).floor()).floor() as u8
}
