//! Analytic Sun/Moon angle provider.

use kala_search::{AngleProvider, ProviderError, SunMoon};
use kala_time::jd_to_centuries;
use kala_vedic_base::{AyanamshaSystem, ayanamsha_at_jd, normalize_360};

use crate::delta_t::utc_to_tt_jd;
use crate::moon::moon_apparent_longitude_deg;
use crate::sun::sun_apparent_longitude_deg;

/// Julian centuries from J2000.0 beyond which the truncated series are
/// not trusted (roughly years 1000 to 3000).
pub const MAX_CENTURIES_FROM_J2000: f64 = 10.0;

/// Low-precision apparent geocentric Sun and Moon longitudes.
///
/// With `ayanamsha` set, longitudes are sidereal (tropical minus the mean
/// ayanamsha of the chosen system); otherwise tropical of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LowPrecisionEphemeris {
    pub ayanamsha: Option<AyanamshaSystem>,
}

impl LowPrecisionEphemeris {
    pub fn tropical() -> Self {
        Self { ayanamsha: None }
    }

    pub fn sidereal(system: AyanamshaSystem) -> Self {
        Self {
            ayanamsha: Some(system),
        }
    }

    /// Frame label for display.
    pub fn frame_name(&self) -> &'static str {
        match self.ayanamsha {
            Some(system) => system.name(),
            None => "tropical",
        }
    }

    fn check_range(jd_utc: f64) -> Result<(), ProviderError> {
        if !jd_utc.is_finite() || jd_to_centuries(jd_utc).abs() > MAX_CENTURIES_FROM_J2000 {
            return Err(ProviderError::OutOfRange { jd_utc });
        }
        Ok(())
    }

    fn to_frame(&self, tropical_deg: f64, jd_tt: f64) -> f64 {
        match self.ayanamsha {
            Some(system) => normalize_360(tropical_deg - ayanamsha_at_jd(system, jd_tt)),
            None => tropical_deg,
        }
    }

    /// Sun longitude in this provider's frame, degrees [0, 360).
    pub fn sun_longitude_deg(&self, jd_utc: f64) -> Result<f64, ProviderError> {
        Self::check_range(jd_utc)?;
        let jd_tt = utc_to_tt_jd(jd_utc);
        Ok(self.to_frame(sun_apparent_longitude_deg(jd_tt), jd_tt))
    }

    /// Moon longitude in this provider's frame, degrees [0, 360).
    pub fn moon_longitude_deg(&self, jd_utc: f64) -> Result<f64, ProviderError> {
        Self::check_range(jd_utc)?;
        let jd_tt = utc_to_tt_jd(jd_utc);
        Ok(self.to_frame(moon_apparent_longitude_deg(jd_tt), jd_tt))
    }
}

impl AngleProvider for LowPrecisionEphemeris {
    fn sun_moon_at(&self, jd_utc: f64) -> Result<SunMoon, ProviderError> {
        Self::check_range(jd_utc)?;
        let jd_tt = utc_to_tt_jd(jd_utc);
        Ok(SunMoon::new(
            self.to_frame(sun_apparent_longitude_deg(jd_tt), jd_tt),
            self.to_frame(moon_apparent_longitude_deg(jd_tt), jd_tt),
        ))
    }
}
