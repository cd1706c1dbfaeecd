//! Karana (half-tithi) names.
//!
//! The synodic month holds 60 karanas of 6° elongation each. Position 1 is
//! the fixed Kimstughna, positions 2-57 cycle through the seven movable
//! karanas eight times, and 58-60 are the fixed Shakuni, Chatushpada and
//! Naga.

/// Span of one karana in degrees of elongation.
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// The eleven karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The movable cycle, repeated across positions 2..=57.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

/// Name of each of the 60 karana positions, position 1 first.
pub const KARANA_SEQUENCE: [Karana; 60] = build_sequence();

const fn build_sequence() -> [Karana; 60] {
    let mut seq = [Karana::Kimstughna; 60];
    let mut i = 1;
    while i < 57 {
        seq[i] = MOVABLE_KARANAS[(i - 1) % 7];
        i += 1;
    }
    seq[57] = Karana::Shakuni;
    seq[58] = Karana::Chatushpada;
    seq[59] = Karana::Naga;
    seq
}

impl Karana {
    /// Karana at a 1-based position in the month (1..=60). Out-of-range
    /// values wrap.
    pub fn from_index(index: u32) -> Self {
        KARANA_SEQUENCE[((index.max(1) - 1) % 60) as usize]
    }

    /// Whether this is one of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }
}
