//! Karana (half-tithi) names.
//!
//! The 60 karanas of a synodic month are the halves of the 30 tithis. The
//! first half of Shukla Pratipada is the fixed Kimstughna; indices 1..56
//! cycle through the seven movable karanas; indices 57..59 are the fixed
//! Shakuni, Chatushpada and Naga.

use crate::util::segment_index;

/// Karanas per synodic month.
pub const KARANA_COUNT: u8 = 60;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Karana for a 0-based sequence index within the month (wraps mod 60).
    pub const fn from_index(index: u8) -> Self {
        match index % KARANA_COUNT {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            i => MOVABLE[((i - 1) % 7) as usize],
        }
    }

    /// Vishti (Bhadra) is the karana avoided for auspicious work.
    pub const fn is_vishti(self) -> bool {
        matches!(self, Self::Vishti)
    }
}

/// 0-based karana sequence index for a Moon-Sun elongation.
pub fn karana_index_from_elongation(elongation_deg: f64) -> u8 {
    segment_index(elongation_deg, KARANA_SEGMENT_DEG, KARANA_COUNT)
}
