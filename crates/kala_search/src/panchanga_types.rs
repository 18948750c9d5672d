//! Types for panchanga composition.

use kala_vedic_base::{
    Karana, Masa, Nakshatra, Paksha, Rashi, SpecialWindows, Tithi, Vaar, Yoga,
};

use crate::angles::Sample;
use crate::boundary::BoundaryEvent;
use crate::synodic_types::SynodicConfig;

/// The civil-day bracket a panchanga is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VedicDay {
    /// Sunrise that opens the day, JD UTC.
    pub sunrise_jd: f64,
    /// Sunset of the same day, JD UTC.
    pub sunset_jd: f64,
    /// Sunrise that closes the day, JD UTC.
    pub next_sunrise_jd: f64,
    /// Observer east longitude, degrees. Used for the local weekday.
    pub longitude_deg: f64,
}

impl VedicDay {
    pub fn new(sunrise_jd: f64, sunset_jd: f64, next_sunrise_jd: f64, longitude_deg: f64) -> Self {
        Self {
            sunrise_jd,
            sunset_jd,
            next_sunrise_jd,
            longitude_deg,
        }
    }

    /// Requires `sunrise < sunset < next_sunrise` and a longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.sunrise_jd.is_finite()
            && self.sunset_jd.is_finite()
            && self.next_sunrise_jd.is_finite())
        {
            return Err("day bracket must be finite");
        }
        if self.sunset_jd <= self.sunrise_jd {
            return Err("sunset must be after sunrise");
        }
        if self.next_sunrise_jd <= self.sunset_jd {
            return Err("next sunrise must be after sunset");
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude must be in [-180, 180]");
        }
        Ok(())
    }

    /// Daytime length, days.
    pub fn day_length(&self) -> f64 {
        self.sunset_jd - self.sunrise_jd
    }

    /// Sunrise to next sunrise, days.
    pub fn span(&self) -> f64 {
        self.next_sunrise_jd - self.sunrise_jd
    }
}

/// Configuration for [`crate::compute_panchanga`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaConfig {
    /// Sample the day and report end times and event lists.
    pub compute_end_times: bool,
    /// Samples taken from sunrise to next sunrise, both inclusive.
    pub samples_per_day: usize,
    /// Reject sample series too sparse to unwrap safely.
    pub strict_sampling: bool,
    /// Return the raw samples with the result.
    pub keep_samples: bool,
    /// New moon search settings for masa.
    pub synodic: SynodicConfig,
}

impl PanchangaConfig {
    /// Sunrise snapshot only: no sampling, no end times.
    pub fn new() -> Self {
        Self {
            compute_end_times: false,
            samples_per_day: 5,
            strict_sampling: true,
            keep_samples: false,
            synodic: SynodicConfig::default(),
        }
    }

    /// Full day with end times at the given sampling density.
    pub fn with_end_times(samples_per_day: usize) -> Self {
        Self {
            compute_end_times: true,
            samples_per_day,
            ..Self::new()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.samples_per_day < 2 {
            return Err("samples_per_day must be >= 2");
        }
        self.synodic.validate()
    }
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Masa (Amanta lunar month) for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    pub masa: Masa,
    /// Intercalary month: no solar sign change between its new moons.
    pub adhika: bool,
    /// Opening new moon, JD UTC.
    pub start_jd: f64,
    /// Closing new moon, JD UTC.
    pub end_jd: f64,
    /// Sun's rashi at the opening new moon.
    pub sun_rashi_at_start: Rashi,
    /// Sun's rashi at the closing new moon.
    pub sun_rashi_at_end: Rashi,
}

/// Tithi in force at sunrise, with the day's tithi boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub start_jd: f64,
    /// First boundary after sunrise, if one falls within the day.
    pub end_jd: Option<f64>,
    pub events: Vec<BoundaryEvent>,
}

/// Moon's nakshatra at sunrise, with the day's boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangaNakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0..26).
    pub nakshatra_index: u8,
    /// Pada at sunrise, 1-4.
    pub pada: u8,
    pub start_jd: f64,
    pub end_jd: Option<f64>,
    pub events: Vec<BoundaryEvent>,
}

/// Yoga at sunrise, with the day's boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    pub start_jd: f64,
    pub end_jd: Option<f64>,
    pub events: Vec<BoundaryEvent>,
}

/// Karana at sunrise, with karana boundaries derived from the tithis.
#[derive(Debug, Clone, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based karana sequence index within the month (0..59).
    pub karana_index: u8,
    pub start_jd: f64,
    /// First karana boundary after sunrise. When sunrise falls in the
    /// second half of a tithi this is the midpoint of the partial interval
    /// up to the first tithi boundary, and `events[0].period_index` is the
    /// even index `2i` rather than `karana_index`.
    pub end_jd: Option<f64>,
    pub events: Vec<BoundaryEvent>,
}

/// Complete panchanga for one Vedic day.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangaResult {
    pub day: VedicDay,
    pub tithi: TithiInfo,
    pub nakshatra: PanchangaNakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaar: Vaar,
    pub paksha: Paksha,
    pub masa: MasaInfo,
    pub windows: SpecialWindows,
    /// Raw samples, present when `keep_samples` and `compute_end_times` are set.
    pub samples: Option<Vec<Sample>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = PanchangaConfig::default();
        assert!(!c.compute_end_times);
        assert_eq!(c.samples_per_day, 5);
        assert!(c.strict_sampling);
        assert!(!c.keep_samples);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_rejects_one_sample() {
        let mut c = PanchangaConfig::with_end_times(1);
        assert!(c.validate().is_err());
        c.samples_per_day = 2;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_surfaces_synodic_errors() {
        let mut c = PanchangaConfig::new();
        c.synodic.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn day_bracket_ordering() {
        assert!(VedicDay::new(10.0, 10.5, 11.0, 77.0).validate().is_ok());
        assert!(VedicDay::new(10.0, 10.0, 11.0, 77.0).validate().is_err());
        assert!(VedicDay::new(10.0, 10.5, 10.4, 77.0).validate().is_err());
        assert!(VedicDay::new(10.0, 10.5, 11.0, 200.0).validate().is_err());
        assert!(VedicDay::new(f64::NAN, 10.5, 11.0, 0.0).validate().is_err());
    }

    #[test]
    fn day_lengths() {
        let d = VedicDay::new(10.0, 10.5, 11.0, 0.0);
        assert!((d.day_length() - 0.5).abs() < 1e-12);
        assert!((d.span() - 1.0).abs() < 1e-12);
    }
}
