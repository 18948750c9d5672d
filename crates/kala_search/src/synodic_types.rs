//! Types for the synodic (Moon - Sun) root search.

/// Mean relative motion of the Moon with respect to the Sun, deg/day.
pub const MEAN_SYNODIC_RATE_DEG_PER_DAY: f64 = 12.190749;

/// Direction to search in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Lunar phase targets on the elongation circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    /// Elongation 0 deg (Amavasya).
    NewMoon,
    /// Elongation 180 deg (Purnima).
    FullMoon,
}

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "Amavasya",
            Self::FullMoon => "Purnima",
        }
    }

    pub const fn target_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FullMoon => 180.0,
        }
    }
}

/// Configuration for the synodic root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynodicConfig {
    /// Maximum correction steps.
    pub max_iterations: u32,
    /// Stop once a correction step is smaller than this, days.
    pub tolerance_days: f64,
    /// Rate used to turn an angular offset into a time step, deg/day.
    pub relative_rate_deg_per_day: f64,
}

impl SynodicConfig {
    /// Defaults: 10 iterations, 1e-6 day (~0.09 s), mean synodic rate.
    pub fn new() -> Self {
        Self {
            max_iterations: 10,
            tolerance_days: 1e-6,
            relative_rate_deg_per_day: MEAN_SYNODIC_RATE_DEG_PER_DAY,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 || self.max_iterations > 50 {
            return Err("max_iterations must be in 1..=50");
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err("tolerance_days must be positive");
        }
        if !self.relative_rate_deg_per_day.is_finite() || self.relative_rate_deg_per_day <= 0.0 {
            return Err("relative_rate_deg_per_day must be positive");
        }
        Ok(())
    }
}

impl Default for SynodicConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a synodic root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynodicRoot {
    /// Best estimate of the root, JD UTC.
    pub jd_utc: f64,
    /// Signed elongation offset from the target at `jd_utc`, degrees.
    pub residual_deg: f64,
    /// Size of the final correction step, days.
    pub last_step_days: f64,
    /// Correction steps taken.
    pub iterations: u32,
    /// Whether the final step fell below the tolerance.
    pub converged: bool,
}
