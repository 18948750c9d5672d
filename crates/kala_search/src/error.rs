//! Error types for event detection.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by an angle provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// The requested epoch lies outside the provider's coverage.
    OutOfRange { jd_utc: f64 },
    /// The provider could not produce a position.
    Unavailable(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd_utc } => write!(f, "epoch JD {jd_utc} out of range"),
            Self::Unavailable(msg) => write!(f, "position unavailable: {msg}"),
        }
    }
}

impl Error for ProviderError {}

/// Errors from sampling, searching and panchanga composition.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Sample count below 2, empty time span or a malformed day bracket.
    InvalidInterval(&'static str),
    /// Invalid configuration parameter.
    InvalidConfig(&'static str),
    /// Samples are too sparse for the phase to be unwrapped unambiguously.
    InsufficientSampling { max_gap_days: f64, limit_days: f64 },
    /// Error from the angle provider.
    Provider(ProviderError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval(msg) => write!(f, "invalid interval: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InsufficientSampling {
                max_gap_days,
                limit_days,
            } => write!(
                f,
                "insufficient sampling: gap of {max_gap_days} days exceeds limit of {limit_days} days"
            ),
            Self::Provider(e) => write!(f, "provider error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProviderError> for SearchError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}
