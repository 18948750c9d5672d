//! Day-time windows: Rahu Kalam, Yamaganda, Gulika Kalam and Abhijit muhurta.
//!
//! Daytime (sunrise to sunset) is divided into 8 equal portions. Each of
//! Rahu Kalam, Yamaganda and Gulika Kalam occupies one portion whose
//! position depends on the weekday. Abhijit is the 8th of the 15 day
//! muhurtas and straddles local noon.

use crate::vaar::Vaar;

/// Daytime portions.
pub const DAY_PORTIONS: u8 = 8;

/// Muhurtas in daytime.
pub const DAY_MUHURTAS: u8 = 15;

/// 0-based Abhijit muhurta index.
pub const ABHIJIT_MUHURTA_INDEX: u8 = 7;

// Portion index per weekday, Sunday first.
const RAHU_PORTION: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];
const YAMAGANDA_PORTION: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];
const GULIKA_PORTION: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Half-open time window `[start_jd, end_jd)` in JD UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TimeWindow {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Which weekday-dependent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kalam {
    Rahu,
    Yamaganda,
    Gulika,
}

impl Kalam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu Kalam",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika Kalam",
        }
    }

    /// 0-based daytime portion occupied on the given weekday.
    pub const fn portion_index(self, vaar: Vaar) -> u8 {
        let w = vaar.index() as usize;
        match self {
            Self::Rahu => RAHU_PORTION[w],
            Self::Yamaganda => YAMAGANDA_PORTION[w],
            Self::Gulika => GULIKA_PORTION[w],
        }
    }
}

/// All four windows of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialWindows {
    pub rahu_kalam: TimeWindow,
    pub yamaganda: TimeWindow,
    pub gulika_kalam: TimeWindow,
    pub abhijit: TimeWindow,
}

/// Divide `[base_jd, end_jd]` into `parts` equal pieces and return piece `index`.
fn slice_window(base_jd: f64, end_jd: f64, parts: u8, index: u8) -> TimeWindow {
    let piece = (end_jd - base_jd) / parts as f64;
    let start = base_jd + index as f64 * piece;
    TimeWindow {
        start_jd: start,
        end_jd: start + piece,
    }
}

/// One weekday-dependent window for the day bracketed by sunrise and sunset.
pub fn kalam_window(kalam: Kalam, sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> TimeWindow {
    slice_window(sunrise_jd, sunset_jd, DAY_PORTIONS, kalam.portion_index(vaar))
}

/// Abhijit muhurta: `[sunrise + 7d/15, sunrise + 8d/15]`.
pub fn abhijit_window(sunrise_jd: f64, sunset_jd: f64) -> TimeWindow {
    slice_window(sunrise_jd, sunset_jd, DAY_MUHURTAS, ABHIJIT_MUHURTA_INDEX)
}

/// Compute all special windows for one day.
///
/// `vaar` should be the weekday of the local civil date of `sunrise_jd`.
pub fn special_windows(sunrise_jd: f64, sunset_jd: f64, vaar: Vaar) -> SpecialWindows {
    SpecialWindows {
        rahu_kalam: kalam_window(Kalam::Rahu, sunrise_jd, sunset_jd, vaar),
        yamaganda: kalam_window(Kalam::Yamaganda, sunrise_jd, sunset_jd, vaar),
        gulika_kalam: kalam_window(Kalam::Gulika, sunrise_jd, sunset_jd, vaar),
        abhijit: abhijit_window(sunrise_jd, sunset_jd),
    }
}
