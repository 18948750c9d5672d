//! Apparent geocentric Sun, low precision.
//!
//! Mean elements and equation of centre from Meeus, "Astronomical
//! Algorithms", ch. 25. Accuracy is about 0.01 deg in longitude, ample for
//! sunrise and for sankranti-level masa decisions.

use kala_time::jd_to_centuries;
use kala_vedic_base::normalize_360;

/// Longitude of the Moon's mean ascending node, degrees (low precision).
pub(crate) fn moon_node_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Mean obliquity of the ecliptic, degrees (IAU 1980 polynomial).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + (26.0 + arcsec / 60.0) / 60.0
}

/// Sun's geometric mean position and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// True geometric longitude, mean equinox of date, degrees.
    pub true_lon_deg: f64,
    /// Apparent longitude (nutation and aberration applied), degrees.
    pub apparent_lon_deg: f64,
    /// Earth-Sun distance, AU.
    pub distance_au: f64,
}

/// Sun position at a Julian Date (TT).
pub fn sun_position(jd_tt: f64) -> SunPosition {
    let t = jd_to_centuries(jd_tt);
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    let omega = moon_node_deg(t).to_radians();
    let apparent = true_lon - 0.00569 - 0.00478 * omega.sin();

    SunPosition {
        true_lon_deg: normalize_360(true_lon),
        apparent_lon_deg: normalize_360(apparent),
        distance_au,
    }
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees [0, 360).
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    sun_position(jd_tt).apparent_lon_deg
}

/// Apparent right ascension and declination of the Sun, radians.
///
/// RA is in [0, 2pi).
pub fn sun_apparent_ra_dec(jd_tt: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd_tt);
    let lambda = sun_apparent_longitude_deg(jd_tt).to_radians();
    let omega = moon_node_deg(t).to_radians();
    let eps = (mean_obliquity_deg(t) + 0.00256 * omega.cos()).to_radians();

    let ra = (eps.cos() * lambda.sin())
        .atan2(lambda.cos())
        .rem_euclid(std::f64::consts::TAU);
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13 0h TD: apparent longitude 199.90895 deg, R = 0.99766 AU
        let pos = sun_position(2_448_908.5);
        assert!((pos.apparent_lon_deg - 199.90895).abs() < 0.001, "{pos:?}");
        assert!((pos.distance_au - 0.99766).abs() < 1e-4);
        let (ra, dec) = sun_apparent_ra_dec(2_448_908.5);
        // RA 198.38083 deg, Dec -7.78507 deg
        assert!((ra.to_degrees() - 198.38083).abs() < 0.001);
        assert!((dec.to_degrees() - (-7.78507)).abs() < 0.001);
    }

    #[test]
    fn equinox_longitude_near_zero() {
        // 2024-Mar-20 03:06 UTC vernal equinox
        let jd = 2_460_389.629_2 + 69.0 / 86_400.0;
        let lon = sun_apparent_longitude_deg(jd);
        let d = kala_vedic_base::normalize_to_pm180(lon);
        assert!(d.abs() < 0.03, "lon {lon}");
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-5);
    }
}
