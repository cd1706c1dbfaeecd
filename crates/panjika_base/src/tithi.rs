//! Tithi (lunar day) names and paksha.
//!
//! A tithi is one of 30 segments of the Moon-Sun elongation, 12° each.
//! Tithis 1-15 form the waxing fortnight, 16-30 the waning one.

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight (new moon to full moon).
    Shukla,
    /// Waning fortnight (full moon to new moon).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha, shared by both halves.
const DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// Tithi for a 1-based index (1..=30). Out-of-range values wrap.
    pub fn from_index(index: u32) -> Self {
        ALL_TITHIS[((index.max(1) - 1) % 30) as usize]
    }

    /// 1-based position in the month (1..=30).
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn paksha(self) -> Paksha {
        if self.index() <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based position within the paksha (1..=15).
    pub fn tithi_in_paksha(self) -> u32 {
        (self.index() - 1) % 15 + 1
    }

    /// Tithi name without the paksha prefix (e.g. "Dashami", "Purnima").
    pub fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => DAY_NAMES[(self.tithi_in_paksha() - 1) as usize],
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}
