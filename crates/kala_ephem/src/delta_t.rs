//! Approximate Delta T (TT - UT).
//!
//! Polynomial fit for 2005-2050 (Espenak & Meeus), used over the whole
//! range the analytic theories are good for. Errors of a few seconds shift
//! lunar longitudes by well under an arcsecond.

use kala_time::{SECONDS_PER_DAY, jd_to_calendar};

/// Delta T in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let t = year - 2000.0;
    62.92 + 0.32217 * t + 0.005589 * t * t
}

/// Decimal year of a Julian Date.
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, day_frac) = jd_to_calendar(jd);
    year as f64 + (month as f64 - 1.0 + (day_frac - 1.0) / 31.0) / 12.0
}

/// Convert a UTC Julian Date to Terrestrial Time.
///
/// UT1 - UTC (< 0.9 s) is ignored.
pub fn utc_to_tt_jd(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(decimal_year(jd_utc)) / SECONDS_PER_DAY
}
