//! Tithi (lunar day) and Paksha classification.
//!
//! A tithi is a 12 deg segment of the Moon-Sun elongation; 30 tithis make a
//! synodic month. Indices 0..14 form Shukla paksha (waxing, ending at
//! Purnima), 15..29 form Krishna paksha (waning, ending at Amavasya).

use crate::util::segment_index;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Tithi names within a paksha, 1-based position 1..15. Position 15 is
/// Purnima in Shukla paksha and Amavasya in Krishna paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const PAKSHA_TITHIS: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tithi for a 0-based month index (0..29, wrapping).
    pub const fn from_index(index: u8) -> Self {
        let index = index % TITHI_COUNT;
        match index {
            14 => Self::Purnima,
            29 => Self::Amavasya,
            _ => PAKSHA_TITHIS[(index % 15) as usize],
        }
    }
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithi indices 0..14.
    Shukla,
    /// Waning half, tithi indices 15..29.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Paksha of a 0-based tithi index.
    pub const fn from_tithi_index(tithi_index: u8) -> Self {
        if tithi_index % TITHI_COUNT < 15 {
            Self::Shukla
        } else {
            Self::Krishna
        }
    }
}

/// Tithi position derived from an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index within the month (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based position within the paksha (1..15).
    pub tithi_in_paksha: u8,
    /// Degrees already elapsed within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon-Sun elongation (degrees) into its tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let idx = segment_index(elongation_deg, TITHI_SEGMENT_DEG, TITHI_COUNT);
    let elong = crate::util::normalize_360(elongation_deg);
    TithiPosition {
        tithi: Tithi::from_index(idx),
        tithi_index: idx,
        paksha: Paksha::from_tithi_index(idx),
        tithi_in_paksha: idx % 15 + 1,
        degrees_in_tithi: elong - idx as f64 * TITHI_SEGMENT_DEG,
    }
}
