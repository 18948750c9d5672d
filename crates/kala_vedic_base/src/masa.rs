//! Masa (lunar month) naming, Amanta system.
//!
//! An Amanta month runs new moon to new moon. A regular month is named
//! after the rashi the Sun occupies at the closing new moon (the rashi it
//! entered during the month): Mesha -> Chaitra, Vrishabha -> Vaishakha, and
//! so on. When the Sun stays in one rashi across both new moons no sankranti
//! falls in the month and it is adhika; it takes the name of the regular
//! month that follows.

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Masa named by the Sun's rashi at the closing new moon.
pub const fn masa_from_rashi(rashi: Rashi) -> Masa {
    ALL_MASAS[rashi.index() as usize]
}

/// Name a month from the Sun's rashi at its opening and closing new moons.
///
/// Returns `(masa, adhika)`.
pub fn classify_masa(rashi_at_start: Rashi, rashi_at_end: Rashi) -> (Masa, bool) {
    if rashi_at_start == rashi_at_end {
        (masa_from_rashi(rashi_at_start.next()), true)
    } else {
        (masa_from_rashi(rashi_at_end), false)
    }
}
