//! Boundary crossing detection over a sampled phase series.
//!
//! The phase circle is cut into `max_index` equal segments of `step_deg`.
//! Walking the samples in time order, every segment boundary the unwrapped
//! phase passes is reported with a linearly interpolated crossing time.
//! Several boundaries may fall between two samples (a skipped, kshaya
//! period) and none may fall in a whole day (a period spanning two
//! sunrises); both come out naturally.
//!
//! Periods shorter than the sample spacing are resolved only as far as
//! linear interpolation allows.

use kala_vedic_base::{NAKSHATRA_COUNT, NAKSHATRA_SPAN_27, TITHI_COUNT, TITHI_SEGMENT_DEG};
use kala_vedic_base::{YOGA_COUNT, YOGA_SEGMENT_DEG};
use tracing::debug;

use crate::angles::Sample;
use crate::phase::{PhaseMode, unwrap_phase};

/// One detected boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEvent {
    /// Index of the period that just ended.
    pub period_index: u8,
    /// Interpolated crossing time, JD UTC.
    pub crossing_jd_utc: f64,
    /// Boundary phase mod 360, degrees.
    pub boundary_phase_deg: f64,
}

/// Sampled panchanga quantities with their segment geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    Tithi,
    Nakshatra,
    Yoga,
}

impl PeriodKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
        }
    }

    pub const fn mode(self) -> PhaseMode {
        match self {
            Self::Tithi => PhaseMode::Difference,
            Self::Nakshatra => PhaseMode::Raw,
            Self::Yoga => PhaseMode::Sum,
        }
    }

    pub const fn step_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_27,
            Self::Yoga => YOGA_SEGMENT_DEG,
        }
    }

    pub const fn max_index(self) -> u8 {
        match self {
            Self::Tithi => TITHI_COUNT,
            Self::Nakshatra => NAKSHATRA_COUNT,
            Self::Yoga => YOGA_COUNT,
        }
    }
}

/// Per-call tracking state.
struct Tracker {
    index: u8,
    step_deg: f64,
    max_index: u8,
}

impl Tracker {
    /// First boundary strictly above `prev_phase` that ends the tracked period.
    fn next_candidate(&self, prev_phase: f64) -> f64 {
        let target = (self.index as f64 + 1.0) * self.step_deg;
        let mut diff = (target - prev_phase).rem_euclid(360.0);
        if diff <= 0.0 {
            diff += 360.0;
        }
        prev_phase + diff
    }

    fn advance(&mut self) {
        self.index = ((self.index as u16 + 1) % self.max_index as u16) as u8;
    }
}

/// Detect every boundary crossing in `samples`.
///
/// `initial_index` is the period in force at the first sample. Each event
/// names the period that ended. Returns nothing for fewer than two samples,
/// a zero `max_index` or a non-positive `step_deg`.
///
/// Samples must be dense enough that the phase moves less than 180 deg
/// between neighbours; see [`crate::ensure_sampling_density`].
pub fn detect_boundaries(
    samples: &[Sample],
    initial_index: u8,
    step_deg: f64,
    max_index: u8,
    mode: PhaseMode,
) -> Vec<BoundaryEvent> {
    let mut events = Vec::new();
    if samples.len() < 2 || max_index == 0 || step_deg.is_nan() || step_deg <= 0.0 {
        return events;
    }

    let mut tracker = Tracker {
        index: initial_index % max_index,
        step_deg,
        max_index,
    };
    let mut prev_phase = mode.phase_of(&samples[0]);
    let mut prev_time = samples[0].jd_utc;

    for s in &samples[1..] {
        let curr_phase = unwrap_phase(prev_phase, mode.phase_of(s));
        let curr_time = s.jd_utc;

        let mut candidate = tracker.next_candidate(prev_phase);
        while candidate <= curr_phase {
            let ratio = (candidate - prev_phase) / (curr_phase - prev_phase);
            events.push(BoundaryEvent {
                period_index: tracker.index,
                crossing_jd_utc: prev_time + ratio * (curr_time - prev_time),
                boundary_phase_deg: candidate.rem_euclid(360.0),
            });
            tracker.advance();
            candidate = tracker.next_candidate(prev_phase);
        }

        prev_phase = curr_phase;
        prev_time = curr_time;
    }

    debug!(
        mode = mode.name(),
        samples = samples.len(),
        events = events.len(),
        "boundary detection finished"
    );
    events
}

/// [`detect_boundaries`] with the geometry taken from `kind`.
pub fn detect_period_boundaries(
    samples: &[Sample],
    initial_index: u8,
    kind: PeriodKind,
) -> Vec<BoundaryEvent> {
    detect_boundaries(
        samples,
        initial_index,
        kind.step_deg(),
        kind.max_index(),
        kind.mode(),
    )
}
