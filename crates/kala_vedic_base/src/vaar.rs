//! Vaar (weekday).
//!
//! The vaar of a Vedic day is the weekday of the civil date on which its
//! sunrise falls. Because JD counts from Greenwich noon, the civil date must
//! be taken in local time; local mean time from the observer's longitude is
//! enough since sunrise is never near local midnight.

/// Days in a week.
pub const VAAR_COUNT: u8 = 7;

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % VAAR_COUNT) as usize]
    }
}

/// Weekday of the UT civil date containing `jd`.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day_number = (jd + 1.5).floor() as i64;
    Vaar::from_index(day_number.rem_euclid(VAAR_COUNT as i64) as u8)
}

/// Weekday of the local civil date containing `jd_utc` at a given east
/// longitude (local mean time).
pub fn vaar_from_local_jd(jd_utc: f64, longitude_deg: f64) -> Vaar {
    vaar_from_jd(jd_utc + longitude_deg / 360.0)
}
