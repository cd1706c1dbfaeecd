//! Element classification from sidereal Sun and Moon longitudes.
//!
//! All angular elements are pure functions of (Sun, Moon). Indices are
//! 1-based and clamped into range after floating-point reduction.

use crate::angle::{cyclic_diff, normalize_360, segment_index};
use crate::error::DomainError;
use crate::karana::KARANA_SPAN_DEG;
use crate::nakshatra::{NAKSHATRA_SPAN_DEG, PADA_SPAN_DEG};
use crate::tithi::TITHI_SPAN_DEG;
use crate::yoga::YOGA_SPAN_DEG;

/// The five panchang elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    Vara,
}

pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Tithi,
    Element::Nakshatra,
    Element::Yoga,
    Element::Karana,
    Element::Vara,
];

impl Element {
    /// Angular span of one segment; `None` for Vara, which is not angular.
    pub const fn span_deg(self) -> Option<f64> {
        match self {
            Self::Tithi => Some(TITHI_SPAN_DEG),
            Self::Nakshatra => Some(NAKSHATRA_SPAN_DEG),
            Self::Yoga => Some(YOGA_SPAN_DEG),
            Self::Karana => Some(KARANA_SPAN_DEG),
            Self::Vara => None,
        }
    }

    /// Number of distinct values in one cycle.
    pub const fn count(self) -> u32 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
            Self::Vara => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
            Self::Vara => "vara",
        }
    }

    /// Index following `index` in the cycle (wraps from `count` to 1, or
    /// from 6 to 0 for Vara).
    pub fn next_index(self, index: u32) -> u32 {
        match self {
            Self::Vara => (index + 1) % 7,
            _ => index % self.count() + 1,
        }
    }

    /// Index preceding `index` in the cycle.
    pub fn previous_index(self, index: u32) -> u32 {
        match self {
            Self::Vara => (index + 6) % 7,
            _ => (index + self.count() - 2) % self.count() + 1,
        }
    }
}

/// 1-based indices of the four angular elements at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementIndices {
    pub tithi: u32,
    pub nakshatra: u32,
    pub yoga: u32,
    pub karana: u32,
}

fn one_based(value: f64, span: f64, count: u32) -> Result<u32, DomainError> {
    Ok(segment_index(value, span)?.min(count - 1) + 1)
}

/// Moon-Sun elongation in [0, 360).
pub fn elongation(sun_deg: f64, moon_deg: f64) -> f64 {
    cyclic_diff(moon_deg, sun_deg)
}

/// Sun + Moon longitude sum in [0, 360).
pub fn longitude_sum(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_360(sun_deg + moon_deg)
}

/// Tithi index (1..=30).
pub fn tithi_index(sun_deg: f64, moon_deg: f64) -> Result<u32, DomainError> {
    one_based(elongation(sun_deg, moon_deg), TITHI_SPAN_DEG, 30)
}

/// Nakshatra index (1..=27); depends on the Moon only.
pub fn nakshatra_index(moon_deg: f64) -> Result<u32, DomainError> {
    one_based(normalize_360(moon_deg), NAKSHATRA_SPAN_DEG, 27)
}

/// Pada (1..=4) of the Moon within its nakshatra.
pub fn nakshatra_pada(moon_deg: f64) -> Result<u32, DomainError> {
    let within = normalize_360(moon_deg) % NAKSHATRA_SPAN_DEG;
    one_based(within, PADA_SPAN_DEG, 4)
}

/// Yoga index (1..=27).
pub fn yoga_index(sun_deg: f64, moon_deg: f64) -> Result<u32, DomainError> {
    one_based(longitude_sum(sun_deg, moon_deg), YOGA_SPAN_DEG, 27)
}

/// Karana index (1..=60).
pub fn karana_index(sun_deg: f64, moon_deg: f64) -> Result<u32, DomainError> {
    one_based(elongation(sun_deg, moon_deg), KARANA_SPAN_DEG, 60)
}

/// All four angular element indices.
pub fn classify(sun_deg: f64, moon_deg: f64) -> Result<ElementIndices, DomainError> {
    Ok(ElementIndices {
        tithi: tithi_index(sun_deg, moon_deg)?,
        nakshatra: nakshatra_index(moon_deg)?,
        yoga: yoga_index(sun_deg, moon_deg)?,
        karana: karana_index(sun_deg, moon_deg)?,
    })
}
