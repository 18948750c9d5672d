//! Sunrise/sunset and the sunrise-to-sunrise Vedic day.
//!
//! The Sun's hour angle at the target altitude comes from
//! `cos H = (sin h0 - sin phi sin dec) / (cos phi cos dec)`; the estimate
//! around local transit is then refined against GMST with the Sun's
//! position recomputed at each step.

use std::f64::consts::{PI, TAU};

use kala_search::VedicDay;
use kala_time::{UtcTime, calendar_to_jd};
use tracing::debug;

use crate::delta_t::utc_to_tt_jd;
use crate::error::EphemError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::sidereal::{gmst_rad, local_sidereal_time_rad};
use crate::sun::sun_apparent_ra_dec;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rotation rate, radians per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and east longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Cosine of the hour angle at which the Sun reaches `h0_rad`.
fn cos_hour_angle(h0_rad: f64, phi: f64, dec: f64) -> f64 {
    (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Sun's hour angle at a UTC instant, radians in [-pi, pi].
fn sun_hour_angle(jd_utc: f64, location: &GeoLocation, ra: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad());
    wrap_pi(lst - ra)
}

/// Compute a single sunrise or sunset.
///
/// `jd_utc_noon` is approximate local noon on the desired date; use
/// [`approximate_local_noon_jd`] to get it from a calendar date.
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    location.validate().map_err(EphemError::InvalidLocation)?;
    config.validate().map_err(EphemError::InvalidConfig)?;

    let phi = location.latitude_rad();
    let h0_rad = (-config.horizon_depression_deg(location.altitude_m)).to_radians();

    let (ra, dec) = sun_apparent_ra_dec(utc_to_tt_jd(jd_utc_noon));
    let cos_h0 = cos_hour_angle(h0_rad, phi, dec);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit is where HA = 0; start from there and step out by H0.
    let jd_utc_transit = jd_utc_noon - sun_hour_angle(jd_utc_noon, location, ra) / SIDEREAL_RATE;
    let h0_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_utc_event = if event.is_rising() {
        jd_utc_transit - h0_days
    } else {
        jd_utc_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = sun_apparent_ra_dec(utc_to_tt_jd(jd_utc_event));
        let cos_h = cos_hour_angle(h0_rad, phi, dec_i);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let ha_actual = sun_hour_angle(jd_utc_event, location, ra_i);

        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
        jd_utc_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_utc_event,
        event,
    })
}

/// Sunrise and sunset around one local noon.
pub fn sunrise_sunset(
    location: &GeoLocation,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<(RiseSetResult, RiseSetResult), EphemError> {
    let rise = compute_rise_set(location, RiseSetEvent::Sunrise, jd_utc_noon, config)?;
    let set = compute_rise_set(location, RiseSetEvent::Sunset, jd_utc_noon, config)?;
    Ok((rise, set))
}

fn require_event(result: RiseSetResult) -> Result<f64, EphemError> {
    match result {
        RiseSetResult::Event { jd_utc, .. } => Ok(jd_utc),
        RiseSetResult::NeverRises => Err(EphemError::NoEvent("sun never rises (polar night)")),
        RiseSetResult::NeverSets => Err(EphemError::NoEvent("sun never sets (midnight sun)")),
    }
}

/// Sunrise-to-sunrise bracket for a civil date at a location.
pub fn vedic_day_for_date(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<VedicDay, EphemError> {
    UtcTime::date(year, month, day).validate()?;
    location.validate().map_err(EphemError::InvalidLocation)?;

    let jd_0h = calendar_to_jd(year, month, f64::from(day));
    let noon = approximate_local_noon_jd(jd_0h, location.longitude_deg);

    let (rise, set) = sunrise_sunset(location, noon, config)?;
    let sunrise_jd = require_event(rise)?;
    let sunset_jd = require_event(set)?;
    let next_sunrise_jd = require_event(compute_rise_set(
        location,
        RiseSetEvent::Sunrise,
        noon + 1.0,
        config,
    )?)?;

    let vedic_day = VedicDay::new(sunrise_jd, sunset_jd, next_sunrise_jd, location.longitude_deg);
    vedic_day.validate().map_err(EphemError::InvalidDay)?;
    debug!(
        year,
        month,
        day,
        sunrise_jd,
        sunset_jd,
        next_sunrise_jd,
        "vedic day bracket"
    );
    Ok(vedic_day)
}
