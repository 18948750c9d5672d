//! Phase functions and phase unwrapping.
//!
//! A phase function maps a (Sun, Moon) longitude pair to the angle whose
//! equal segments define a panchanga quantity. Sampled phases wrap at 360
//! deg; unwrapping turns them into a continuous series so that boundary
//! crossings can be located by linear interpolation.
//!
//! Unwrapping assumes the true motion between adjacent samples is below
//! 180 deg. Faster motion is indistinguishable from slower motion in the
//! opposite direction and silently corrupts the series.
//! [`ensure_sampling_density`] checks this up front.

use kala_vedic_base::{normalize_360, normalize_to_pm180};

use crate::angles::Sample;
use crate::error::SearchError;

/// Which combination of longitudes drives a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseMode {
    /// (Moon - Sun) mod 360: tithi and karana.
    Difference,
    /// (Moon + Sun) mod 360: yoga.
    Sum,
    /// Moon mod 360: nakshatra.
    Raw,
}

impl PhaseMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Difference => "difference",
            Self::Sum => "sum",
            Self::Raw => "raw",
        }
    }

    /// Phase in [0, 360) for the given longitudes.
    pub fn phase(self, sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
        match self {
            Self::Difference => normalize_360(moon_lon_deg - sun_lon_deg),
            Self::Sum => normalize_360(moon_lon_deg + sun_lon_deg),
            Self::Raw => normalize_360(moon_lon_deg),
        }
    }

    /// Phase of one sample.
    pub fn phase_of(self, sample: &Sample) -> f64 {
        self.phase(sample.sun_lon_deg, sample.moon_lon_deg)
    }

    /// Upper bound on the phase rate, deg/day.
    ///
    /// Moon speed peaks near 15.4 deg/day and the Sun near 1.02 deg/day.
    pub const fn max_rate_deg_per_day(self) -> f64 {
        match self {
            Self::Difference => 15.5,
            Self::Sum => 16.5,
            Self::Raw => 15.5,
        }
    }
}

/// A phase value on the unwrapped (continuous) axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePoint {
    pub jd_utc: f64,
    pub phase_deg: f64,
}

/// Unwrap `curr_deg` against `prev_deg`.
///
/// Returns the value congruent to `curr_deg` mod 360 closest to `prev_deg`.
pub fn unwrap_phase(prev_deg: f64, curr_deg: f64) -> f64 {
    prev_deg + normalize_to_pm180(curr_deg - prev_deg)
}

/// Unwrap the phase of a whole sample series.
///
/// The first point keeps its wrapped value in [0, 360).
pub fn unwrap_series(samples: &[Sample], mode: PhaseMode) -> Vec<PhasePoint> {
    let mut out = Vec::with_capacity(samples.len());
    let mut prev: Option<f64> = None;
    for s in samples {
        let raw = mode.phase_of(s);
        let phase = match prev {
            Some(p) => unwrap_phase(p, raw),
            None => raw,
        };
        out.push(PhasePoint {
            jd_utc: s.jd_utc,
            phase_deg: phase,
        });
        prev = Some(phase);
    }
    out
}

/// Largest time gap between adjacent samples, days. Zero for fewer than two.
pub fn max_sample_gap_days(samples: &[Sample]) -> f64 {
    samples
        .windows(2)
        .map(|w| w[1].jd_utc - w[0].jd_utc)
        .fold(0.0, f64::max)
}

/// Reject sample series too sparse to unwrap unambiguously.
///
/// Fails when the largest gap lets the phase move 180 deg or more at
/// [`PhaseMode::max_rate_deg_per_day`].
pub fn ensure_sampling_density(samples: &[Sample], mode: PhaseMode) -> Result<(), SearchError> {
    let max_gap_days = max_sample_gap_days(samples);
    let limit_days = 180.0 / mode.max_rate_deg_per_day();
    if max_gap_days >= limit_days {
        return Err(SearchError::InsufficientSampling {
            max_gap_days,
            limit_days,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_modes() {
        assert!((PhaseMode::Difference.phase(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((PhaseMode::Sum.phase(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((PhaseMode::Raw.phase(350.0, 20.0) - 20.0).abs() < 1e-12);
        assert!((PhaseMode::Difference.phase(10.0, 5.0) - 355.0).abs() < 1e-12);
    }

    #[test]
    fn unwrap_across_zero() {
        assert!((unwrap_phase(350.0, 5.0) - 365.0).abs() < 1e-12);
        assert!((unwrap_phase(5.0, 350.0) - (-10.0)).abs() < 1e-12);
        assert!((unwrap_phase(100.0, 120.0) - 120.0).abs() < 1e-12);
    }

    #[test]
    fn unwrap_keeps_branch_far_from_origin() {
        // prev already unwrapped past 360
        assert!((unwrap_phase(715.0, 2.0) - 722.0).abs() < 1e-12);
    }

    #[test]
    fn unwrapped_series_is_continuous() {
        let samples: Vec<Sample> = (0..10)
            .map(|i| Sample::new(i as f64 * 0.25, 0.0, 300.0 + i as f64 * 20.0))
            .collect();
        let pts = unwrap_series(&samples, PhaseMode::Raw);
        for w in pts.windows(2) {
            let d = w[1].phase_deg - w[0].phase_deg;
            assert!((d - 20.0).abs() < 1e-9, "step {d}");
        }
        assert!((pts[9].phase_deg - 480.0).abs() < 1e-9);
    }

    #[test]
    fn density_check() {
        let dense = [Sample::new(0.0, 0.0, 0.0), Sample::new(5.0, 0.0, 0.0)];
        assert!(ensure_sampling_density(&dense, PhaseMode::Difference).is_ok());

        let sparse = [Sample::new(0.0, 0.0, 0.0), Sample::new(12.0, 0.0, 0.0)];
        match ensure_sampling_density(&sparse, PhaseMode::Difference) {
            Err(SearchError::InsufficientSampling {
                max_gap_days,
                limit_days,
            }) => {
                assert!((max_gap_days - 12.0).abs() < 1e-12);
                assert!((limit_days - 180.0 / 15.5).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn density_trivially_ok_for_short_series() {
        assert!(ensure_sampling_density(&[], PhaseMode::Sum).is_ok());
        assert!(ensure_sampling_density(&[Sample::new(0.0, 0.0, 0.0)], PhaseMode::Sum).is_ok());
    }
}
