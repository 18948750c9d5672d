//! Low-precision analytic ephemeris for the kala panchanga engine.
//!
//! This crate provides:
//! - Apparent Sun and Moon longitudes from truncated analytic theories
//! - `LowPrecisionEphemeris`, an `AngleProvider` in tropical or sidereal frame
//! - Sunrise/sunset and the sunrise-to-sunrise `VedicDay` for a civil date
//!
//! Inputs are Julian Dates in UTC; Delta T is applied internally.

pub mod delta_t;
pub mod error;
pub mod moon;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod sidereal;
pub mod sun;

pub use delta_t::{decimal_year, delta_t_seconds, utc_to_tt_jd};
pub use error::EphemError;
pub use moon::{
    LunarArguments, moon_apparent_longitude_deg, moon_geometric_longitude_deg,
    nutation_longitude_deg,
};
pub use provider::{LowPrecisionEphemeris, MAX_CENTURIES_FROM_J2000};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, sunrise_sunset, vedic_day_for_date};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
pub use sun::{
    SunPosition, mean_obliquity_deg, sun_apparent_longitude_deg, sun_apparent_ra_dec, sun_position,
};
