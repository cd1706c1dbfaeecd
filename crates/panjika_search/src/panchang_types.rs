//! Types for panchang classification results.

use panjika_base::{DomainError, Element, Karana, Nakshatra, Paksha, Tithi, Vaar, Yoga};
use panjika_time::{CivilDate, Instant};

use crate::transition_types::TransitionConfig;

/// One element's value at a moment, with its root-found boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementState {
    /// Which element this is.
    pub element: Element,
    /// 1-based index for the angular elements, 0..=6 (0 = Sunday) for Vara.
    pub index: u32,
    /// Start of this element (UTC).
    pub start: Instant,
    /// End of this element (UTC).
    pub end: Instant,
    /// Preceding index, when the query is within the spillover window of
    /// `start`.
    pub previous: Option<u32>,
    /// Following index, when the query is within the spillover window of
    /// `end`.
    pub next: Option<u32>,
}

impl ElementState {
    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Length of this element in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.end.seconds_since(self.start)
    }
}

/// Tithi (lunar day) classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    pub state: ElementState,
    /// The tithi.
    pub tithi: Tithi,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u32,
}

/// Moon's nakshatra classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub state: ElementState,
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4, at the query instant.
    pub pada: u32,
}

/// Yoga (luni-solar yoga) classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub state: ElementState,
    /// The yoga.
    pub yoga: Yoga,
}

/// Karana (half-tithi) classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub state: ElementState,
    /// The karana name.
    pub karana: Karana,
}

/// Vaar (weekday) classification result with sunrise boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaarInfo {
    /// `start` is the sunrise opening this Vedic day, `end` the next one.
    pub state: ElementState,
    /// The vaar (weekday).
    pub vaar: Vaar,
    /// Local date whose sunrise starts this Vedic day.
    pub date: CivilDate,
}

/// The two local sunrises bracketing an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VedicDay {
    /// Local mean time date whose sunrise opens the day.
    pub date: CivilDate,
    /// Sunrise at or before the query instant.
    pub sunrise: Instant,
    /// Following sunrise, after the query instant.
    pub next_sunrise: Instant,
}

/// Combined panchang for a single moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangResult {
    /// Query instant.
    pub instant: Instant,
    /// Sidereal Sun longitude used for classification, degrees.
    pub sun_longitude_deg: f64,
    /// Sidereal Moon longitude used for classification, degrees.
    pub moon_longitude_deg: f64,
    /// Tithi (lunar day).
    pub tithi: TithiInfo,
    /// Moon's nakshatra.
    pub nakshatra: NakshatraInfo,
    /// Yoga (luni-solar yoga).
    pub yoga: YogaInfo,
    /// Karana (half-tithi).
    pub karana: KaranaInfo,
    /// Vaar (Vedic weekday).
    pub vaar: VaarInfo,
}

/// Configuration for panchang queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    /// Report the neighbouring index when a boundary is within this many
    /// hours of the query (default 6; 0 disables).
    pub spillover_window_hours: f64,
    /// Root finding settings for every boundary search.
    pub transition: TransitionConfig,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            spillover_window_hours: 6.0,
            transition: TransitionConfig::default(),
        }
    }
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.spillover_window_hours.is_finite() || self.spillover_window_hours < 0.0 {
            return Err(DomainError::InvalidConfig(
                "spillover_window_hours must be finite and >= 0",
            ));
        }
        self.transition.validate()
    }

    pub(crate) fn spillover_window_seconds(&self) -> f64 {
        self.spillover_window_hours * 3600.0
    }
}
