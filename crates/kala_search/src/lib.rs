//! Panchanga event detection engine.
//!
//! This crate provides:
//! - `AngleProvider`, the seam to any Sun/Moon ephemeris, and uniform sampling
//! - Phase functions and phase unwrapping
//! - Boundary crossing detection for tithi, nakshatra and yoga, including
//!   skipped and repeated periods within one day
//! - Karana events derived from tithi events
//! - New moon / full moon search and Amanta masa with adhika detection
//! - Daily panchanga composition with Rahu Kalam and related windows
//!
//! All times are Julian Dates in UTC. Longitudes are degrees in whatever
//! frame the provider supplies.

pub mod angles;
pub mod boundary;
pub mod error;
pub mod karana;
pub mod masa;
pub mod panchanga;
pub mod panchanga_types;
pub mod phase;
pub mod synodic;
pub mod synodic_types;

pub use angles::{AngleProvider, Sample, SunMoon, sample_angles, sample_at};
pub use boundary::{BoundaryEvent, PeriodKind, detect_boundaries, detect_period_boundaries};
pub use error::{ProviderError, SearchError};
pub use karana::derive_karanas;
pub use masa::masa_for_day;
pub use panchanga::compute_panchanga;
pub use panchanga_types::{
    KaranaInfo, MasaInfo, PanchangaConfig, PanchangaNakshatraInfo, PanchangaResult, TithiInfo,
    VedicDay, YogaInfo,
};
pub use phase::{
    PhaseMode, PhasePoint, ensure_sampling_density, max_sample_gap_days, unwrap_phase,
    unwrap_series,
};
pub use synodic::{
    find_lunar_phase, find_synodic_target, find_synodic_zero, next_full_moon, next_new_moon,
    prev_full_moon, prev_new_moon, search_lunar_phases,
};
pub use synodic_types::{
    LunarPhase, MEAN_SYNODIC_RATE_DEG_PER_DAY, SearchDirection, SynodicConfig, SynodicRoot,
};
