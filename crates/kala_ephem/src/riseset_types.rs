//! Types for sunrise/sunset calculations.

use std::f64::consts::PI;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be within [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be within [-180, 180]");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude must be finite");
        }
        Ok(())
    }
}

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears above the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer altitude: sqrt(2h/R) radians.
    /// Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.refraction_arcmin.is_finite() || self.refraction_arcmin < 0.0 {
            return Err("refraction_arcmin must be finite and non-negative");
        }
        if !self.semidiameter_arcmin.is_finite() || self.semidiameter_arcmin < 0.0 {
            return Err("semidiameter_arcmin must be finite and non-negative");
        }
        Ok(())
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UTC).
    Event { jd_utc: f64, event: RiseSetEvent },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event time, if the event occurs.
    pub fn jd_utc(&self) -> Option<f64> {
        match self {
            Self::Event { jd_utc, .. } => Some(*jd_utc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.semidiameter_arcmin, 16.0);
        assert!(c.altitude_correction);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn depression_sea_level() {
        let d = RiseSetConfig::default().horizon_depression_deg(0.0);
        assert!((d - 50.0 / 60.0).abs() < 1e-10, "sea level: {d}");
    }

    #[test]
    fn depression_1000m() {
        let d = RiseSetConfig::default().horizon_depression_deg(1000.0);
        let base = 50.0 / 60.0;
        // sqrt(2*1000/6371000) rad ~ 1.015 deg
        assert!(d > base + 0.9 && d < base + 1.2, "1000m depression {d}");
    }

    #[test]
    fn depression_without_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        assert!((c.horizon_depression_deg(10_000.0) - 50.0 / 60.0).abs() < 1e-10);
    }

    #[test]
    fn negative_refraction_rejected() {
        let c = RiseSetConfig {
            refraction_arcmin: -1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(28.6139, 77.209, 216.0).validate().is_ok());
        assert!(GeoLocation::new(91.0, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -181.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn geolocation_radians() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn result_accessor() {
        let r = RiseSetResult::Event {
            jd_utc: 2_460_000.25,
            event: RiseSetEvent::Sunrise,
        };
        assert_eq!(r.jd_utc(), Some(2_460_000.25));
        assert_eq!(RiseSetResult::NeverSets.jd_utc(), None);
    }
}
