//! Karana events derived from tithi events.
//!
//! A karana is half a tithi, so karana boundaries are not sampled
//! separately. Each tithi interval `[start, end)` inside the searched span
//! contributes its first-half karana (ending at the midpoint) and its
//! second-half karana (ending at `end`). The partial intervals at either
//! end of the span are halved the same way.

use kala_vedic_base::{KARANA_COUNT, KARANA_SEGMENT_DEG, TITHI_COUNT};

use crate::boundary::BoundaryEvent;

fn karana_event(karana_index: u8, jd: f64) -> BoundaryEvent {
    BoundaryEvent {
        period_index: karana_index,
        crossing_jd_utc: jd,
        boundary_phase_deg: ((karana_index as f64 + 1.0) * KARANA_SEGMENT_DEG).rem_euclid(360.0),
    }
}

fn push_halves(events: &mut Vec<BoundaryEvent>, tithi_index: u8, start: f64, end: f64) {
    if end <= start {
        return;
    }
    let mid = 0.5 * (start + end);
    let first = ((tithi_index as u16 * 2) % KARANA_COUNT as u16) as u8;
    let second = ((tithi_index as u16 * 2 + 1) % KARANA_COUNT as u16) as u8;
    events.push(karana_event(first, mid));
    events.push(karana_event(second, end));
}

/// Derive karana boundary events from tithi events over
/// `[interval_start, interval_end]`.
///
/// `initial_tithi_index` is the tithi in force at `interval_start`.
/// Zero-length intervals are skipped, so the result holds exactly two
/// events per non-degenerate tithi interval.
pub fn derive_karanas(
    tithi_events: &[BoundaryEvent],
    interval_start: f64,
    interval_end: f64,
    initial_tithi_index: u8,
) -> Vec<BoundaryEvent> {
    let mut events = Vec::with_capacity(2 * (tithi_events.len() + 1));
    let mut curr_start = interval_start;
    let mut curr_index = initial_tithi_index % TITHI_COUNT;

    for ev in tithi_events {
        push_halves(&mut events, curr_index, curr_start, ev.crossing_jd_utc);
        curr_index = (ev.period_index + 1) % TITHI_COUNT;
        curr_start = ev.crossing_jd_utc;
    }
    if curr_start < interval_end {
        push_halves(&mut events, curr_index, curr_start, interval_end);
    }
    events
}
