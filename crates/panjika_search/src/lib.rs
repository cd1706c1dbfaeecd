//! Panchang, Bengali solar calendar and day-timing engines.
//!
//! This crate provides:
//! - Angular transition search (tithi, karana, nakshatra, yoga, Sankranti
//!   boundaries) by bracketed regula falsi
//! - Panchang for a moment: the five elements with start/end times and
//!   spillover neighbours
//! - Sankranti search and the Bengali solar date with a configurable day-1
//!   rule
//! - Rahu Kalam, Yama Gandam, Gulika Kalam and Abhijit Muhurat
//!
//! All engines read the sky through [`panjika_core::EphemerisPort`].

pub mod day_timing;
pub mod day_timing_types;
pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod query;
pub mod sankranti;
pub mod sankranti_types;
pub mod transition;
pub mod transition_types;

pub use day_timing::{day_timings, segment_of};
pub use day_timing_types::{DaySegmentKind, DayTimingResult, DayTimingSegment};
pub use error::SearchError;
pub use panchang::{
    elongation_at, karana_at, longitude_sum_at, moon_longitude_at, nakshatra_at,
    panchang_for_instant, tithi_at, vaar_at, vedic_day_sunrises, yoga_at,
};
pub use panchang_types::{
    ElementState, KaranaInfo, NakshatraInfo, PanchangConfig, PanchangResult, TithiInfo, VaarInfo,
    VedicDay, YogaInfo,
};
pub use query::{compute_day_timings, compute_panchang, compute_solar_date};
pub use sankranti::{
    month_start, next_sankranti, prev_sankranti, search_sankrantis, solar_date, sun_longitude_at,
};
pub use sankranti_types::{
    IST_OFFSET_MINUTES, SankrantiEvent, SankrantiRollover, SolarCalendarConfig, SolarDate,
};
pub use transition::find_transition;
pub use transition_types::{
    ELONGATION_RATE_DEG_PER_DAY, LONGITUDE_SUM_RATE_DEG_PER_DAY, MOON_RATE_DEG_PER_DAY,
    SUN_RATE_DEG_PER_DAY, SearchDirection, TransitionConfig,
};
