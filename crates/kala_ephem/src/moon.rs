//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated ELP-2000/82 periodic series as tabulated by Meeus,
//! "Astronomical Algorithms", ch. 47 (all non-zero longitude terms). Error is a
//! few arcseconds, well inside what a tithi boundary needs.

use kala_time::jd_to_centuries;
use kala_vedic_base::normalize_360;

/// One periodic longitude term: multiples of D, M, M', F and the sine
/// coefficient in units of 1e-6 degree.
struct LonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: i32,
}

const fn t(d: i8, m: i8, mp: i8, f: i8, coeff: i32) -> LonTerm {
    LonTerm { d, m, mp, f, coeff }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [LonTerm; 59] = [
    t(0, 0, 1, 0, 6_288_774), t(2, 0, -1, 0, 1_274_027), t(2, 0, 0, 0, 658_314),
    t(0, 0, 2, 0, 213_618),   t(0, 1, 0, 0, -185_116),   t(0, 0, 0, 2, -114_332),
    t(2, 0, -2, 0, 58_793),   t(2, -1, -1, 0, 57_066),   t(2, 0, 1, 0, 53_322),
    t(2, -1, 0, 0, 45_758),   t(0, 1, -1, 0, -40_923),   t(1, 0, 0, 0, -34_720),
    t(0, 1, 1, 0, -30_383),   t(2, 0, 0, -2, 15_327),    t(0, 0, 1, 2, -12_528),
    t(0, 0, 1, -2, 10_980),   t(4, 0, -1, 0, 10_675),    t(0, 0, 3, 0, 10_034),
    t(4, 0, -2, 0, 8_548),    t(2, 1, -1, 0, -7_888),    t(2, 1, 0, 0, -6_766),
    t(1, 0, -1, 0, -5_163),   t(1, 1, 0, 0, 4_987),      t(2, -1, 1, 0, 4_036),
    t(2, 0, 2, 0, 3_994),     t(4, 0, 0, 0, 3_861),      t(2, 0, -3, 0, 3_665),
    t(0, 1, -2, 0, -2_689),   t(2, 0, -1, 2, -2_602),    t(2, -1, -2, 0, 2_390),
    t(1, 0, 1, 0, -2_348),    t(2, -2, 0, 0, 2_236),     t(0, 1, 2, 0, -2_120),
    t(0, 2, 0, 0, -2_069),    t(2, -2, -1, 0, 2_048),    t(2, 0, 1, -2, -1_773),
    t(2, 0, 0, 2, -1_595),    t(4, -1, -1, 0, 1_215),    t(0, 0, 2, 2, -1_110),
    t(3, 0, -1, 0, -892),     t(2, 1, 1, 0, -810),       t(4, -1, -2, 0, 759),
    t(0, 2, -1, 0, -713),     t(2, 2, -1, 0, -700),      t(2, 1, -2, 0, 691),
    t(2, -1, 0, -2, 596),     t(4, 0, 1, 0, 549),        t(0, 0, 4, 0, 537),
    t(4, -1, 0, 0, 520),      t(1, 0, -2, 0, -487),      t(2, 1, 0, -2, -399),
    t(0, 0, 2, -2, -381),     t(1, 1, 1, 0, 351),        t(3, 0, -2, 0, -340),
    t(4, 0, -3, 0, 330),      t(2, -1, 2, 0, 327),       t(0, 2, 1, 0, -323),
    t(1, 1, -1, 0, 299),      t(2, 0, 3, 0, 294),
];

/// Fundamental lunar arguments in degrees (not reduced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_lon: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub arg_latitude: f64,
}

impl LunarArguments {
    pub fn at_centuries(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_lon: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            arg_latitude: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Nutation in longitude, degrees. Four leading terms, good to ~0.5".
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Geometric ecliptic longitude of the Moon, mean equinox of date, degrees.
pub fn moon_geometric_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let args = LunarArguments::at_centuries(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.arg_latitude.to_radians();
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|term| {
            let arg = f64::from(term.d) * d
                + f64::from(term.m) * m
                + f64::from(term.mp) * mp
                + f64::from(term.f) * f;
            let scale = match term.m.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            f64::from(term.coeff) * scale * arg.sin()
        })
        .sum();

    // Venus, Jupiter and flattening terms
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let lp = args.mean_lon.to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    normalize_360(args.mean_lon + sum / 1e6)
}

/// Apparent ecliptic longitude of the Moon (nutation applied), degrees [0, 360).
pub fn moon_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    normalize_360(moon_geometric_longitude_deg(jd_tt) + nutation_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD: geometric 133.162655, apparent 133.167265
        let jd = 2_448_724.5;
        let geo = moon_geometric_longitude_deg(jd);
        assert!((geo - 133.162_655).abs() < 0.003, "geometric {geo}");
        let app = moon_apparent_longitude_deg(jd);
        assert!((app - 133.167_265).abs() < 0.003, "apparent {app}");
    }

    #[test]
    fn nutation_magnitude_is_bounded() {
        for i in 0..100 {
            let dpsi = nutation_longitude_deg(-1.0 + 0.02 * f64::from(i));
            assert!(dpsi.abs() < 20.0 / 3600.0);
        }
    }

    #[test]
    fn longitude_advances_about_13_deg_per_day() {
        let jd = 2_460_000.5;
        let a = moon_apparent_longitude_deg(jd);
        let b = moon_apparent_longitude_deg(jd + 1.0);
        let rate = kala_vedic_base::normalize_360(b - a);
        assert!(rate > 11.5 && rate < 15.5, "rate {rate}");
    }

    #[test]
    fn arguments_at_j2000() {
        let args = LunarArguments::at_centuries(0.0);
        assert!((args.mean_lon - 218.316_447_7).abs() < 1e-9);
        assert!((args.elongation - 297.850_192_1).abs() < 1e-9);
    }
}
