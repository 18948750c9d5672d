//! Greenwich mean sidereal time.

use std::f64::consts::TAU;

use kala_time::{J2000_JD, jd_to_centuries};

/// GMST in radians [0, 2pi) for a UT Julian Date (Meeus eq. 12.4).
///
/// UT1 - UTC is ignored; the resulting error is below 0.004 deg.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let deg = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.to_radians().rem_euclid(TAU)
}

/// Local sidereal time from GMST and east longitude, radians [0, 2pi).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: 99.9678 deg
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.968).abs() < 0.01, "GMST = {deg}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-Apr-10 0h UT: 13h 10m 46.3668s = 197.693195 deg
        let deg = gmst_rad(2_446_895.5).to_degrees();
        assert!((deg - 197.693_195).abs() < 1e-4, "GMST = {deg}");
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_rad(6.0, 1.0);
        assert!((lst - (7.0 - TAU)).abs() < 1e-12);
    }
}
