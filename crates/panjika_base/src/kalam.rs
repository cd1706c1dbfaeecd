//! Weekday tables for the inauspicious day segments.
//!
//! Daytime (sunrise to sunset) is split into 8 equal parts; each weekday
//! assigns one part to Rahu Kalam, Yama Gandam and Gulika Kalam. Part
//! numbers are 0-based and the tables are indexed Sunday first. The same
//! tables select the night segments over sunset to next sunrise.

/// Number of equal parts in a kalam partition.
pub const KALAM_PARTS: u32 = 8;

/// Number of muhurtas in daytime.
pub const MUHURTA_PARTS: u32 = 15;

/// Abhijit is the eighth muhurta (0-based 7).
pub const ABHIJIT_PART: u32 = 7;

const RAHU_KALAM_PARTS: [u32; 7] = [7, 1, 6, 4, 5, 3, 2];
const YAMA_GANDAM_PARTS: [u32; 7] = [4, 3, 2, 1, 0, 6, 5];
const GULIKA_KALAM_PARTS: [u32; 7] = [6, 5, 4, 3, 2, 1, 0];

/// The three weekday-indexed segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kalam {
    RahuKalam,
    YamaGandam,
    GulikaKalam,
}

pub const ALL_KALAMS: [Kalam; 3] = [Kalam::RahuKalam, Kalam::YamaGandam, Kalam::GulikaKalam];

impl Kalam {
    /// 0-based part (of [`KALAM_PARTS`]) for a weekday, 0 = Sunday.
    pub fn part_for_weekday(self, weekday: u8) -> u32 {
        let table = match self {
            Self::RahuKalam => &RAHU_KALAM_PARTS,
            Self::YamaGandam => &YAMA_GANDAM_PARTS,
            Self::GulikaKalam => &GULIKA_KALAM_PARTS,
        };
        table[(weekday % 7) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKalam => "Rahu Kalam",
            Self::YamaGandam => "Yama Gandam",
            Self::GulikaKalam => "Gulika Kalam",
        }
    }
}
