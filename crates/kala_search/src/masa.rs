//! Masa (Amanta lunar month) determination.

use kala_vedic_base::{Rashi, classify_masa, rashi_from_longitude};
use tracing::debug;

use crate::angles::AngleProvider;
use crate::error::SearchError;
use crate::panchanga_types::MasaInfo;
use crate::synodic::{next_new_moon, prev_new_moon};
use crate::synodic_types::SynodicConfig;

/// Sun's rashi at `jd_utc`, from the provider's Sun longitude.
fn sun_rashi_at<P: AngleProvider + ?Sized>(provider: &P, jd_utc: f64) -> Result<Rashi, SearchError> {
    let sm = provider.sun_moon_at(jd_utc)?;
    Ok(rashi_from_longitude(sm.sun_lon_deg).rashi)
}

/// Determine the masa containing `reference_jd`.
///
/// The month is bracketed by the new moon at or before `reference_jd` and
/// the next one after it. If the Sun's rashi is the same at both, no
/// sankranti fell in the month and it is adhika.
///
/// Rashis are read from the provider's Sun longitude, so the provider should
/// be configured for sidereal output.
pub fn masa_for_day<P: AngleProvider + ?Sized>(
    provider: &P,
    reference_jd: f64,
    config: &SynodicConfig,
) -> Result<MasaInfo, SearchError> {
    let prev_nm = prev_new_moon(provider, reference_jd, config)?;
    let next_nm = next_new_moon(provider, reference_jd, config)?;

    let sun_rashi_at_start = sun_rashi_at(provider, prev_nm.jd_utc)?;
    let sun_rashi_at_end = sun_rashi_at(provider, next_nm.jd_utc)?;
    let (masa, adhika) = classify_masa(sun_rashi_at_start, sun_rashi_at_end);

    debug!(
        masa = masa.name(),
        adhika,
        start_jd = prev_nm.jd_utc,
        end_jd = next_nm.jd_utc,
        "masa determined"
    );

    Ok(MasaInfo {
        masa,
        adhika,
        start_jd: prev_nm.jd_utc,
        end_jd: next_nm.jd_utc,
        sun_rashi_at_start,
        sun_rashi_at_end,
    })
}
