//! Pure panchanga classifiers.
//!
//! Every function here maps an angle (or a weekday and a day bracket) to a
//! named calendar quantity. Nothing in this crate performs I/O or fails.

pub mod ayanamsha;
pub mod kalam;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_at_jd, ayanamsha_mean_deg, general_precession_longitude_deg,
};
pub use kalam::{
    ABHIJIT_MUHURTA_INDEX, DAY_MUHURTAS, DAY_PORTIONS, Kalam, SpecialWindows, TimeWindow,
    abhijit_window, kalam_window, special_windows,
};
pub use karana::{KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, karana_index_from_elongation};
pub use masa::{ALL_MASAS, Masa, classify_masa, masa_from_rashi};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_COUNT, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use tithi::{
    Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation,
};
pub use util::{normalize_360, normalize_to_pm180};
pub use vaar::{ALL_VAARS, VAAR_COUNT, Vaar, vaar_from_jd, vaar_from_local_jd};
pub use yoga::{ALL_YOGAS, YOGA_COUNT, YOGA_SEGMENT_DEG, Yoga, yoga_from_sum};
