//! New moon and full moon search.
//!
//! Solves `elongation(t) = target` by fixed-rate correction steps: the
//! angular offset from the target is converted into a time step using the
//! mean Moon-Sun relative rate. The first step is biased by direction so
//! that a forward search never returns a root behind the start and a
//! backward search never returns one ahead of it; later steps take the
//! shortest path to the target.

use kala_vedic_base::{normalize_360, normalize_to_pm180};
use tracing::{debug, warn};

use crate::angles::AngleProvider;
use crate::error::SearchError;
use crate::synodic_types::{LunarPhase, SearchDirection, SynodicConfig, SynodicRoot};

/// Restart offset after a found root; far below half a synodic month.
const RESTART_MARGIN_DAYS: f64 = 1.0;

/// Elongation offset from `target_deg` in [0, 360).
fn elongation_offset<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    target_deg: f64,
) -> Result<f64, SearchError> {
    let sm = provider.sun_moon_at(jd_utc)?;
    Ok(normalize_360(sm.moon_lon_deg - sm.sun_lon_deg - target_deg))
}

/// Find the instant the Moon-Sun elongation reaches `target_deg`.
///
/// Forward searches return the first root after `start_jd` (a full cycle
/// later if `start_jd` is itself a root). Backward searches return the
/// last root at or before `start_jd`.
///
/// Exhausting `max_iterations` is not an error: the best estimate comes
/// back with `converged == false`.
pub fn find_synodic_target<P: AngleProvider + ?Sized>(
    provider: &P,
    start_jd: f64,
    target_deg: f64,
    direction: SearchDirection,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let rate = config.relative_rate_deg_per_day;
    let mut jd = start_jd;
    let mut last_step_days = 0.0;
    let mut iterations = 0;
    let mut converged = false;

    for i in 0..config.max_iterations {
        let offset = elongation_offset(provider, jd, target_deg)?;
        let distance = if i == 0 {
            match direction {
                SearchDirection::Forward => 360.0 - offset,
                SearchDirection::Backward => -offset,
            }
        } else {
            -normalize_to_pm180(offset)
        };
        let step = distance / rate;
        jd += step;
        last_step_days = step;
        iterations = i + 1;
        if step.abs() < config.tolerance_days {
            converged = true;
            break;
        }
    }

    let residual_deg = normalize_to_pm180(elongation_offset(provider, jd, target_deg)?);

    if converged {
        debug!(target_deg, jd, iterations, residual_deg, "synodic search converged");
    } else {
        warn!(
            target_deg,
            jd,
            iterations,
            last_step_days,
            residual_deg,
            "synodic search did not converge within iteration budget"
        );
    }

    Ok(SynodicRoot {
        jd_utc: jd,
        residual_deg,
        last_step_days,
        iterations,
        converged,
    })
}

/// Nearest new moon in `direction` from `start_jd`, default configuration.
pub fn find_synodic_zero<P: AngleProvider + ?Sized>(
    provider: &P,
    start_jd: f64,
    direction: SearchDirection,
) -> Result<SynodicRoot, SearchError> {
    find_synodic_target(provider, start_jd, 0.0, direction, &SynodicConfig::default())
}

/// Search for a lunar phase in `direction` from `start_jd`.
pub fn find_lunar_phase<P: AngleProvider + ?Sized>(
    provider: &P,
    start_jd: f64,
    phase: LunarPhase,
    direction: SearchDirection,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    find_synodic_target(provider, start_jd, phase.target_deg(), direction, config)
}

/// Next new moon (Amavasya) after `jd_utc`.
pub fn next_new_moon<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    find_lunar_phase(provider, jd_utc, LunarPhase::NewMoon, SearchDirection::Forward, config)
}

/// Previous new moon (Amavasya) at or before `jd_utc`.
pub fn prev_new_moon<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    find_lunar_phase(provider, jd_utc, LunarPhase::NewMoon, SearchDirection::Backward, config)
}

/// Next full moon (Purnima) after `jd_utc`.
pub fn next_full_moon<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    find_lunar_phase(provider, jd_utc, LunarPhase::FullMoon, SearchDirection::Forward, config)
}

/// Previous full moon (Purnima) at or before `jd_utc`.
pub fn prev_full_moon<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    config: &SynodicConfig,
) -> Result<SynodicRoot, SearchError> {
    find_lunar_phase(provider, jd_utc, LunarPhase::FullMoon, SearchDirection::Backward, config)
}

/// All occurrences of `phase` in `[jd_start, jd_end]`, in time order.
///
/// Both bounds must be finite. Every restart moves the cursor forward by
/// at least a day, so the search takes at most one step per day of span.
pub fn search_lunar_phases<P: AngleProvider + ?Sized>(
    provider: &P,
    jd_start: f64,
    jd_end: f64,
    phase: LunarPhase,
    config: &SynodicConfig,
) -> Result<Vec<SynodicRoot>, SearchError> {
    if !jd_start.is_finite() || !jd_end.is_finite() {
        return Err(SearchError::InvalidInterval("search bounds must be finite"));
    }
    if jd_end <= jd_start {
        return Err(SearchError::InvalidInterval("jd_end must be after jd_start"));
    }

    let max_steps = ((jd_end - jd_start) / RESTART_MARGIN_DAYS).ceil() as usize + 1;
    let mut roots = Vec::new();
    let mut cursor = jd_start;
    for _ in 0..max_steps {
        let root = find_lunar_phase(provider, cursor, phase, SearchDirection::Forward, config)?;
        if root.jd_utc > jd_end || root.jd_utc < cursor {
            break;
        }
        roots.push(root);
        // Step clear of the root so the next search cannot land on it again
        cursor = root.jd_utc + RESTART_MARGIN_DAYS;
    }
    Ok(roots)
}
