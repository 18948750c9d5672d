//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the human-facing representation of the JD UTC
//! floats used throughout the engine. Leap seconds are not modelled: a
//! UTC day is always 86 400 s long.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check field ranges: month 1-12, day within the month's length
    /// (Gregorian leap years), hour < 24, minute < 60, second < 61.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidField("month must be 1-12"));
        }
        if !(1..=days_in_month(self.year, self.month)).contains(&self.day) {
            return Err(TimeError::InvalidField("day out of range for month"));
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidField("hour must be 0-23"));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidField("minute must be 0-59"));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidField("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Convert to Julian Date (UTC).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a Julian Date (UTC) back to calendar form.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fractional hours since 0h of this date.
    pub fn hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DDThh:mm:ssZ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_fields: Vec<&str> = date_part.split('-').collect();
        if date_fields.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {date_part}")));
        }
        let year: i32 = parse_field(date_fields[0])?;
        let month: u32 = parse_field(date_fields[1])?;
        let day: u32 = parse_field(date_fields[2])?;

        let (hour, minute, second) = match time_part {
            Some(t) => {
                let time_fields: Vec<&str> = t.split(':').collect();
                if time_fields.len() != 3 {
                    return Err(TimeError::Parse(format!("expected hh:mm:ss, got {t}")));
                }
                (
                    parse_field(time_fields[0])?,
                    parse_field(time_fields[1])?,
                    parse_field(time_fields[2])?,
                )
            }
            None => (0, 0, 0.0),
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(s: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    s.parse()
        .map_err(|e| TimeError::Parse(format!("invalid field {s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::date(2024, 1, 15);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }

    #[test]
    fn jd_round_trip_keeps_minutes() {
        let t = UtcTime::new(2024, 1, 11, 11, 57, 0.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2024, 1, 11));
        assert!((back.hours() - t.hours()).abs() < 1e-6);
    }

    #[test]
    fn parse_date_only() {
        let t: UtcTime = "2023-07-25".parse().unwrap();
        assert_eq!(t, UtcTime::date(2023, 7, 25));
    }

    #[test]
    fn parse_full_with_zulu() {
        let t: UtcTime = "2024-01-11T11:57:30Z".parse().unwrap();
        assert_eq!((t.hour, t.minute), (11, 57));
        assert!((t.second - 30.0).abs() < 1e-12);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024/01/11".parse::<UtcTime>().is_err());
        assert!("2024-01-11T11:57".parse::<UtcTime>().is_err());
        assert!("2024-13-11".parse::<UtcTime>().is_err());
        assert!("2024-xx-11".parse::<UtcTime>().is_err());
    }

    #[test]
    fn day_checked_against_month_length() {
        assert!("2023-02-30".parse::<UtcTime>().is_err());
        assert!("2023-02-29".parse::<UtcTime>().is_err());
        assert!("2024-02-29".parse::<UtcTime>().is_ok());
        assert!("1900-02-29".parse::<UtcTime>().is_err());
        assert!("2000-02-29".parse::<UtcTime>().is_ok());
        assert!(UtcTime::date(2024, 4, 31).validate().is_err());
        assert!(UtcTime::date(2024, 4, 30).validate().is_ok());
        assert!(UtcTime::date(2024, 1, 0).validate().is_err());
    }
}
