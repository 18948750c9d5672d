//! Panchanga composition for one Vedic day.
//!
//! Indices at sunrise come straight from the phase functions. End times and
//! full event lists come from sampling sunrise to next sunrise and running
//! the boundary detector over the samples; karanas are derived from the
//! tithi events rather than sampled.

use kala_vedic_base::{
    Karana, Paksha, Yoga, karana_index_from_elongation,
    nakshatra_from_longitude, special_windows, tithi_from_elongation, vaar_from_local_jd,
    yoga_from_sum,
};
use tracing::debug;

use crate::angles::{AngleProvider, Sample, sample_angles, sample_at};
use crate::boundary::{BoundaryEvent, PeriodKind, detect_period_boundaries};
use crate::error::SearchError;
use crate::karana::derive_karanas;
use crate::masa::masa_for_day;
use crate::panchanga_types::{
    KaranaInfo, PanchangaConfig, PanchangaNakshatraInfo, PanchangaResult, TithiInfo, VedicDay,
    YogaInfo,
};
use crate::phase::{PhaseMode, ensure_sampling_density};

/// Per-component event lists for one day.
#[derive(Default)]
struct DayEvents {
    tithi: Vec<BoundaryEvent>,
    nakshatra: Vec<BoundaryEvent>,
    yoga: Vec<BoundaryEvent>,
    karana: Vec<BoundaryEvent>,
}

fn first_end(events: &[BoundaryEvent]) -> Option<f64> {
    events.first().map(|e| e.crossing_jd_utc)
}

/// Detect every component's boundaries over `samples`.
fn collect_events(
    samples: &[Sample],
    day: &VedicDay,
    tithi_index: u8,
    nakshatra_index: u8,
    yoga_index: u8,
) -> DayEvents {
    let tithi = detect_period_boundaries(samples, tithi_index, PeriodKind::Tithi);
    let nakshatra = detect_period_boundaries(samples, nakshatra_index, PeriodKind::Nakshatra);
    let yoga = detect_period_boundaries(samples, yoga_index, PeriodKind::Yoga);
    let karana = derive_karanas(&tithi, day.sunrise_jd, day.next_sunrise_jd, tithi_index);
    DayEvents {
        tithi,
        nakshatra,
        yoga,
        karana,
    }
}

/// Compute the panchanga for the day bracketed by `day`.
///
/// Longitudes from `provider` are used as given; supply sidereal longitudes
/// for nakshatra, yoga and masa to follow the usual sidereal convention.
pub fn compute_panchanga<P: AngleProvider + ?Sized>(
    provider: &P,
    day: &VedicDay,
    config: &PanchangaConfig,
) -> Result<PanchangaResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    day.validate().map_err(SearchError::InvalidInterval)?;

    // Sunrise snapshot
    let at_sunrise = sample_at(provider, day.sunrise_jd)?;
    let elongation = PhaseMode::Difference.phase_of(&at_sunrise);
    let tithi_pos = tithi_from_elongation(elongation);
    let nak = nakshatra_from_longitude(PhaseMode::Raw.phase_of(&at_sunrise));
    let nakshatra_index = nak.nakshatra.index();
    let yoga_index = yoga_from_sum(PhaseMode::Sum.phase_of(&at_sunrise)).index();
    let karana_index = karana_index_from_elongation(elongation);

    debug!(
        sunrise_jd = day.sunrise_jd,
        tithi = tithi_pos.tithi_index,
        nakshatra = nakshatra_index,
        yoga = yoga_index,
        karana = karana_index,
        "panchanga indices at sunrise"
    );

    let mut events = DayEvents::default();
    let mut kept_samples = None;
    if config.compute_end_times {
        let samples = sample_angles(
            provider,
            day.sunrise_jd,
            day.next_sunrise_jd,
            config.samples_per_day,
        )?;
        if config.strict_sampling {
            for mode in [PhaseMode::Difference, PhaseMode::Raw, PhaseMode::Sum] {
                ensure_sampling_density(&samples, mode)?;
            }
        }
        events = collect_events(
            &samples,
            day,
            tithi_pos.tithi_index,
            nakshatra_index,
            yoga_index,
        );
        debug!(
            tithi_events = events.tithi.len(),
            nakshatra_events = events.nakshatra.len(),
            yoga_events = events.yoga.len(),
            karana_events = events.karana.len(),
            "panchanga events collected"
        );
        if config.keep_samples {
            kept_samples = Some(samples);
        }
    }

    let vaar = vaar_from_local_jd(day.sunrise_jd, day.longitude_deg);
    let paksha = Paksha::from_tithi_index(tithi_pos.tithi_index);
    let masa = masa_for_day(provider, day.sunrise_jd, &config.synodic)?;
    let windows = special_windows(day.sunrise_jd, day.sunset_jd, vaar);

    Ok(PanchangaResult {
        day: *day,
        tithi: TithiInfo {
            tithi: tithi_pos.tithi,
            tithi_index: tithi_pos.tithi_index,
            paksha: tithi_pos.paksha,
            tithi_in_paksha: tithi_pos.tithi_in_paksha,
            start_jd: day.sunrise_jd,
            end_jd: first_end(&events.tithi),
            events: events.tithi,
        },
        nakshatra: PanchangaNakshatraInfo {
            nakshatra: nak.nakshatra,
            nakshatra_index,
            pada: nak.pada,
            start_jd: day.sunrise_jd,
            end_jd: first_end(&events.nakshatra),
            events: events.nakshatra,
        },
        yoga: YogaInfo {
            yoga: Yoga::from_index(yoga_index),
            yoga_index,
            start_jd: day.sunrise_jd,
            end_jd: first_end(&events.yoga),
            events: events.yoga,
        },
        karana: KaranaInfo {
            karana: Karana::from_index(karana_index),
            karana_index,
            start_jd: day.sunrise_jd,
            end_jd: first_end(&events.karana),
            events: events.karana,
        },
        vaar,
        paksha,
        masa,
        windows,
        samples: kept_samples,
    })
}
