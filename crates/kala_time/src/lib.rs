//! Calendar support for the kala panchanga engine.
//!
//! This crate provides:
//! - Julian Date <-> Gregorian calendar conversions
//! - `UtcTime`, a parseable/displayable UTC timestamp
//!
//! All engine times are Julian Dates in UTC (`f64`).

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries,
};
pub use utc_time::UtcTime;
