//! Types for Sankranti search and the Bengali solar calendar.

use panjika_base::{BANGABDA_ERA_OFFSET, BengaliMonth, DomainError};
use panjika_time::{CivilDate, Instant};

use crate::transition_types::TransitionConfig;

/// Indian Standard Time, minutes east of UTC.
pub const IST_OFFSET_MINUTES: i32 = 330;

/// A Sankranti: the Sun's entry into a sidereal rashi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SankrantiEvent {
    /// Event time (UTC).
    pub instant: Instant,
    /// 0-based rashi the Sun enters (0 = Mesha .. 11 = Meena).
    pub rashi_index: u32,
    /// Sidereal Sun longitude at the found instant, degrees [0, 360).
    pub sun_longitude_deg: f64,
}

impl SankrantiEvent {
    /// Bengali month that this Sankranti opens.
    pub fn month(&self) -> BengaliMonth {
        BengaliMonth::from_rashi_index(self.rashi_index)
    }
}

/// Rule for the first day of a solar month after its Sankranti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SankrantiRollover {
    /// Day 1 begins at the first local sunrise at or after the Sankranti.
    #[default]
    Sunrise,
    /// The Sankranti's civil date in the offset closes the old month; day 1
    /// is the next civil date.
    Midnight { utc_offset_minutes: i32 },
}

impl SankrantiRollover {
    /// Midnight rule in Indian Standard Time.
    pub const fn midnight_ist() -> Self {
        Self::Midnight {
            utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }
}

/// Configuration for solar date queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalendarConfig {
    /// Day-1 rule (default sunrise).
    pub rollover: SankrantiRollover,
    /// Gregorian minus Bangabda year for Boishakh..Poush (default 593).
    pub bengali_era_offset: i32,
    /// Root finding settings for the Sankranti search.
    pub transition: TransitionConfig,
}

impl Default for SolarCalendarConfig {
    fn default() -> Self {
        Self {
            rollover: SankrantiRollover::default(),
            bengali_era_offset: BANGABDA_ERA_OFFSET,
            transition: TransitionConfig::default(),
        }
    }
}

impl SolarCalendarConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let SankrantiRollover::Midnight { utc_offset_minutes } = self.rollover {
            if !(-720..=840).contains(&utc_offset_minutes) {
                return Err(DomainError::InvalidConfig(
                    "utc_offset_minutes must be within -720..=840",
                ));
            }
        }
        self.transition.validate()
    }
}

/// A date in the Bengali solar calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDate {
    /// Solar month.
    pub month: BengaliMonth,
    /// 1-based day of the month.
    pub day: u32,
    /// Bangabda year.
    pub year: i32,
    /// Sankranti that opened the month.
    pub sankranti: SankrantiEvent,
    /// Start of day 1 (UTC).
    pub month_start: Instant,
    /// Civil date of day 1.
    pub month_start_date: CivilDate,
}
