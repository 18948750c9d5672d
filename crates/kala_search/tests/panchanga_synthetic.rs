//! Panchanga composition, masa and new moon search against synthetic
//! linear Sun/Moon models with known answers.

use kala_search::{
    LunarPhase, MEAN_SYNODIC_RATE_DEG_PER_DAY, PanchangaConfig, ProviderError, SearchDirection,
    SearchError, SunMoon, SynodicConfig, VedicDay, compute_panchanga, find_synodic_zero,
    masa_for_day, search_lunar_phases,
};
use kala_vedic_base::{
    Karana, Masa, Nakshatra, Paksha, Rashi, Tithi, Vaar, special_windows, vaar_from_jd,
};

const NEW_MOON_JD: f64 = 2_460_000.0;
const SUN_RATE: f64 = 0.9856;

/// Linear model: new moon at `NEW_MOON_JD` with the Sun at `sun0` degrees.
fn linear_model(sun0: f64) -> impl Fn(f64) -> Result<SunMoon, ProviderError> {
    move |jd: f64| {
        let dt = jd - NEW_MOON_JD;
        let sun = sun0 + SUN_RATE * dt;
        let moon = sun + MEAN_SYNODIC_RATE_DEG_PER_DAY * dt;
        Ok(SunMoon::new(sun, moon))
    }
}

fn synodic_month() -> f64 {
    360.0 / MEAN_SYNODIC_RATE_DEG_PER_DAY
}

fn test_day() -> VedicDay {
    let sunrise = NEW_MOON_JD + 10.0;
    VedicDay::new(sunrise, sunrise + 0.5, sunrise + 1.0, 0.0)
}

#[test]
fn new_moon_forward_and_backward_converge() {
    let p = linear_model(100.0);
    let fwd = find_synodic_zero(&p, NEW_MOON_JD - 3.0, SearchDirection::Forward).unwrap();
    assert!(fwd.converged);
    assert!((fwd.jd_utc - NEW_MOON_JD).abs() < 1e-6);
    assert!(fwd.last_step_days.abs() < 1e-6);

    let back = find_synodic_zero(&p, NEW_MOON_JD + 3.0, SearchDirection::Backward).unwrap();
    assert!(back.converged);
    assert!((back.jd_utc - NEW_MOON_JD).abs() < 1e-6);
}

#[test]
fn forward_search_from_mid_month_finds_next_cycle() {
    let p = linear_model(100.0);
    let root = find_synodic_zero(&p, NEW_MOON_JD + 15.0, SearchDirection::Forward).unwrap();
    assert!((root.jd_utc - (NEW_MOON_JD + synodic_month())).abs() < 1e-6);
}

#[test]
fn full_moons_over_a_quarter_year() {
    let p = linear_model(100.0);
    let roots = search_lunar_phases(
        &p,
        NEW_MOON_JD,
        NEW_MOON_JD + 90.0,
        LunarPhase::FullMoon,
        &SynodicConfig::default(),
    )
    .unwrap();
    assert_eq!(roots.len(), 3);
    assert!((roots[0].jd_utc - (NEW_MOON_JD + 0.5 * synodic_month())).abs() < 1e-6);
}

#[test]
fn nija_month_when_sun_changes_sign() {
    // Sun at 100 deg (Karka) at the opening new moon, ~129.1 (Simha) at the next.
    let p = linear_model(100.0);
    let info = masa_for_day(&p, NEW_MOON_JD + 10.0, &SynodicConfig::default()).unwrap();
    assert_eq!(info.sun_rashi_at_start, Rashi::Karka);
    assert_eq!(info.sun_rashi_at_end, Rashi::Simha);
    assert_eq!(info.masa, Masa::Shravana);
    assert!(!info.adhika);
    assert!((info.start_jd - NEW_MOON_JD).abs() < 1e-6);
    assert!((info.end_jd - (NEW_MOON_JD + synodic_month())).abs() < 1e-6);
}

#[test]
fn adhika_month_when_sun_stays_in_sign() {
    // Sun enters Karka just before the new moon and is still there 29.5 days later.
    let p = linear_model(90.3);
    let info = masa_for_day(&p, NEW_MOON_JD + 10.0, &SynodicConfig::default()).unwrap();
    assert_eq!(info.sun_rashi_at_start, Rashi::Karka);
    assert_eq!(info.sun_rashi_at_end, Rashi::Karka);
    assert_eq!(info.masa, Masa::Shravana);
    assert!(info.adhika);
}

#[test]
fn sunrise_snapshot_without_end_times() {
    let p = linear_model(90.3);
    let day = test_day();
    let r = compute_panchanga(&p, &day, &PanchangaConfig::default()).unwrap();

    // Elongation at sunrise = 10 * 12.19 = 121.9 deg -> Shukla Ekadashi
    assert_eq!(r.tithi.tithi_index, 10);
    assert_eq!(r.tithi.tithi, Tithi::Ekadashi);
    assert_eq!(r.tithi.paksha, Paksha::Shukla);
    assert_eq!(r.paksha, Paksha::Shukla);
    assert_eq!(r.tithi.tithi_in_paksha, 11);
    assert_eq!(r.karana.karana_index, 20);
    assert_eq!(r.karana.karana, Karana::from_index(20));
    assert!(r.tithi.events.is_empty());
    assert!(r.tithi.end_jd.is_none());
    assert!(r.karana.events.is_empty());
    assert!(r.samples.is_none());
    assert_eq!(r.tithi.start_jd, day.sunrise_jd);
}

#[test]
fn end_times_fall_within_the_day() {
    let p = linear_model(90.3);
    let day = test_day();
    let config = PanchangaConfig {
        keep_samples: true,
        ..PanchangaConfig::with_end_times(5)
    };
    let r = compute_panchanga(&p, &day, &config).unwrap();

    // Elongation runs 121.9 -> 134.1 and crosses 132 once.
    assert_eq!(r.tithi.events.len(), 1);
    assert_eq!(r.tithi.events[0].period_index, 10);
    let expected = NEW_MOON_JD + 132.0 / MEAN_SYNODIC_RATE_DEG_PER_DAY;
    let end = r.tithi.end_jd.unwrap();
    assert!((end - expected).abs() < 1e-6, "tithi end {end}");

    for info_end in [r.nakshatra.end_jd, r.yoga.end_jd, r.karana.end_jd] {
        let t = info_end.unwrap();
        assert!(t > day.sunrise_jd && t <= day.next_sunrise_jd);
    }
    assert_eq!(r.karana.events.len(), 2 * (r.tithi.events.len() + 1));
    assert_eq!(r.samples.as_ref().map(Vec::len), Some(5));
}

#[test]
fn nakshatra_at_sunrise() {
    let p = linear_model(90.3);
    let day = test_day();
    let r = compute_panchanga(&p, &day, &PanchangaConfig::default()).unwrap();
    // Moon = 90.3 + 9.856 + 121.9 = 222.06 deg -> Anuradha (16), pada 3
    assert_eq!(r.nakshatra.nakshatra_index, 16);
    assert_eq!(r.nakshatra.nakshatra, Nakshatra::Anuradha);
    assert_eq!(r.nakshatra.pada, 3);
}

#[test]
fn vaar_and_windows_follow_sunrise() {
    let p = linear_model(90.3);
    let day = test_day();
    let r = compute_panchanga(&p, &day, &PanchangaConfig::default()).unwrap();
    assert_eq!(r.vaar, vaar_from_jd(day.sunrise_jd));
    assert_eq!(r.vaar, Vaar::Somvaar);
    assert_eq!(
        r.windows,
        special_windows(day.sunrise_jd, day.sunset_jd, r.vaar)
    );
}

#[test]
fn composition_is_idempotent() {
    let p = linear_model(100.0);
    let day = test_day();
    let config = PanchangaConfig::with_end_times(9);
    let a = compute_panchanga(&p, &day, &config).unwrap();
    let b = compute_panchanga(&p, &day, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn karana_end_when_sunrise_is_in_second_half_of_tithi() {
    // Elongation 9 deg at sunrise (second karana of Pratipada), 12 deg/day.
    let day = test_day();
    let sunrise = day.sunrise_jd;
    let p = move |jd: f64| -> Result<SunMoon, ProviderError> {
        Ok(SunMoon::new(0.0, 9.0 + 12.0 * (jd - sunrise)))
    };
    let r = compute_panchanga(&p, &day, &PanchangaConfig::with_end_times(20)).unwrap();

    assert_eq!(r.tithi.tithi_index, 0);
    assert_eq!(r.karana.karana_index, 1);
    // Pratipada ends at 12 deg, a quarter day after sunrise.
    assert!((r.tithi.end_jd.unwrap() - (sunrise + 0.25)).abs() < 1e-6);

    // The partial interval is halved: the first event is the even karana
    // at its midpoint, not the end of the karana in force at sunrise.
    let first = r.karana.events[0];
    assert_eq!(first.period_index, 0);
    assert!((first.crossing_jd_utc - (sunrise + 0.125)).abs() < 1e-6);
    assert_eq!(r.karana.end_jd, Some(first.crossing_jd_utc));
    assert_eq!(r.karana.events[1].period_index, 1);
    assert!((r.karana.events[1].crossing_jd_utc - (sunrise + 0.25)).abs() < 1e-6);
}

#[test]
fn fast_phase_skips_a_tithi() {
    // Elongation moving 30 deg in one day: two tithis end within it.
    let fast = |jd: f64| -> Result<SunMoon, ProviderError> {
        let dt = jd - NEW_MOON_JD;
        Ok(SunMoon::new(0.0, 3.0 + 30.0 * (dt - 10.0)))
    };
    let day = test_day();
    let mut config = PanchangaConfig::with_end_times(13);
    config.synodic.relative_rate_deg_per_day = 30.0;
    let r = compute_panchanga(&fast, &day, &config).unwrap();
    let idx: Vec<u8> = r.tithi.events.iter().map(|e| e.period_index).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(r.karana.events.len(), 6);
}

#[test]
fn sparse_sampling_is_rejected_when_strict() {
    let p = linear_model(100.0);
    let sunrise = NEW_MOON_JD + 2.0;
    let wide = VedicDay::new(sunrise, sunrise + 0.5, sunrise + 20.0, 0.0);
    let strict = PanchangaConfig::with_end_times(2);
    let err = compute_panchanga(&p, &wide, &strict).unwrap_err();
    assert!(matches!(err, SearchError::InsufficientSampling { .. }));

    let lenient = PanchangaConfig {
        strict_sampling: false,
        ..strict
    };
    assert!(compute_panchanga(&p, &wide, &lenient).is_ok());
}

#[test]
fn malformed_day_is_rejected() {
    let p = linear_model(100.0);
    let bad = VedicDay::new(10.0, 9.0, 11.0, 0.0);
    let err = compute_panchanga(&p, &bad, &PanchangaConfig::default()).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInterval(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let p = linear_model(100.0);
    let config = PanchangaConfig::with_end_times(1);
    let err = compute_panchanga(&p, &test_day(), &config).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig(_)));
}

#[test]
fn provider_failure_propagates_unchanged() {
    let failing = |jd: f64| -> Result<SunMoon, ProviderError> {
        Err(ProviderError::OutOfRange { jd_utc: jd })
    };
    let day = test_day();
    let err = compute_panchanga(&failing, &day, &PanchangaConfig::default()).unwrap_err();
    assert_eq!(
        err,
        SearchError::Provider(ProviderError::OutOfRange {
            jd_utc: day.sunrise_jd
        })
    );
}
