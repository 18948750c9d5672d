//! Error types for the analytic ephemeris and rise/set computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kala_time::TimeError;

/// Errors from low-precision ephemeris queries and sunrise/sunset.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid rise/set configuration.
    InvalidConfig(&'static str),
    /// Invalid calendar input.
    Time(TimeError),
    /// The Sun does not rise or set on the requested date.
    NoEvent(&'static str),
    /// The computed sunrise/sunset bracket is inconsistent.
    InvalidDay(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoEvent(msg) => write!(f, "no rise/set event: {msg}"),
            Self::InvalidDay(msg) => write!(f, "invalid day bracket: {msg}"),
        }
    }
}

impl Error for EphemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EphemError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
