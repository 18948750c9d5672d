//! Angle provider seam and uniform sampling of Sun/Moon longitudes.

use kala_vedic_base::normalize_360;

use crate::error::{ProviderError, SearchError};

/// Sun and Moon ecliptic longitudes at one instant, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunMoon {
    pub sun_lon_deg: f64,
    pub moon_lon_deg: f64,
}

impl SunMoon {
    pub fn new(sun_lon_deg: f64, moon_lon_deg: f64) -> Self {
        Self {
            sun_lon_deg,
            moon_lon_deg,
        }
    }
}

/// Source of Sun/Moon longitudes.
///
/// Implementations decide the frame (tropical or sidereal) and precision.
/// The engine only consumes the two angles.
pub trait AngleProvider {
    fn sun_moon_at(&self, jd_utc: f64) -> Result<SunMoon, ProviderError>;
}

impl<F> AngleProvider for F
where
    F: Fn(f64) -> Result<SunMoon, ProviderError>,
{
    fn sun_moon_at(&self, jd_utc: f64) -> Result<SunMoon, ProviderError> {
        self(jd_utc)
    }
}

/// One timestamped observation with longitudes normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub jd_utc: f64,
    pub sun_lon_deg: f64,
    pub moon_lon_deg: f64,
}

impl Sample {
    pub fn new(jd_utc: f64, sun_lon_deg: f64, moon_lon_deg: f64) -> Self {
        Self {
            jd_utc,
            sun_lon_deg: normalize_360(sun_lon_deg),
            moon_lon_deg: normalize_360(moon_lon_deg),
        }
    }
}

/// Query the provider once and normalize.
pub fn sample_at<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
) -> Result<Sample, SearchError> {
    let sm = provider.sun_moon_at(jd_utc)?;
    Ok(Sample::new(jd_utc, sm.sun_lon_deg, sm.moon_lon_deg))
}

/// Sample `sample_count` evenly spaced instants over `[start_jd, end_jd]`,
/// both endpoints included.
pub fn sample_angles<P: AngleProvider + ?Sized>(
    provider: &P,
    start_jd: f64,
    end_jd: f64,
    sample_count: usize,
) -> Result<Vec<Sample>, SearchError> {
    if sample_count < 2 {
        return Err(SearchError::InvalidInterval("sample_count must be >= 2"));
    }
    if end_jd.is_nan() || end_jd <= start_jd {
        return Err(SearchError::InvalidInterval("end_jd must be after start_jd"));
    }

    let span = end_jd - start_jd;
    let last = (sample_count - 1) as f64;
    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        // Pin the final instant to end_jd exactly
        let jd = if i + 1 == sample_count {
            end_jd
        } else {
            start_jd + (i as f64 / last) * span
        };
        samples.push(sample_at(provider, jd)?);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(jd: f64) -> Result<SunMoon, ProviderError> {
        Ok(SunMoon::new(-10.0, jd * 370.0))
    }

    #[test]
    fn endpoints_inclusive() {
        let s = sample_angles(&fixed, 10.0, 11.0, 5).unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s[0].jd_utc, 10.0);
        assert_eq!(s[4].jd_utc, 11.0);
        assert!((s[1].jd_utc - 10.25).abs() < 1e-12);
    }

    #[test]
    fn longitudes_normalized() {
        let s = sample_angles(&fixed, 1.0, 2.0, 2).unwrap();
        for x in &s {
            assert!((0.0..360.0).contains(&x.sun_lon_deg));
            assert!((0.0..360.0).contains(&x.moon_lon_deg));
        }
        assert!((s[0].sun_lon_deg - 350.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_counts_and_spans() {
        assert!(matches!(
            sample_angles(&fixed, 0.0, 1.0, 1),
            Err(SearchError::InvalidInterval(_))
        ));
        assert!(matches!(
            sample_angles(&fixed, 1.0, 1.0, 5),
            Err(SearchError::InvalidInterval(_))
        ));
        assert!(matches!(
            sample_angles(&fixed, 2.0, 1.0, 5),
            Err(SearchError::InvalidInterval(_))
        ));
    }

    #[test]
    fn provider_error_propagates() {
        let failing = |jd: f64| -> Result<SunMoon, ProviderError> {
            if jd > 0.5 {
                Err(ProviderError::OutOfRange { jd_utc: jd })
            } else {
                Ok(SunMoon::new(0.0, 0.0))
            }
        };
        let err = sample_angles(&failing, 0.0, 1.0, 3).unwrap_err();
        assert_eq!(
            err,
            SearchError::Provider(ProviderError::OutOfRange { jd_utc: 1.0 })
        );
    }
}
