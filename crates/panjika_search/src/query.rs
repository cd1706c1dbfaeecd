//! Entry points taking explicit instants and locations.
//!
//! Each query validates its location and configuration, then delegates to
//! the engine module. There is no global default engine, time or place.

use panjika_base::DomainError;
use panjika_core::{EphemerisError, EphemerisPort, GeoLocation};
use panjika_time::{CivilDate, Instant};

use crate::day_timing::day_timings;
use crate::day_timing_types::DayTimingResult;
use crate::error::SearchError;
use crate::panchang::panchang_for_instant;
use crate::panchang_types::{PanchangConfig, PanchangResult};
use crate::sankranti::solar_date;
use crate::sankranti_types::{SolarCalendarConfig, SolarDate};

fn check_location(location: &GeoLocation) -> Result<(), SearchError> {
    location.validate().map_err(|e| match e {
        EphemerisError::InvalidLocation(msg) => DomainError::InvalidLocation(msg),
        _ => DomainError::InvalidLocation("location out of range"),
    })?;
    Ok(())
}

/// Tithi, nakshatra, yoga, karana and vaar at `instant` for `location`.
pub fn compute_panchang<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<PanchangResult, SearchError> {
    check_location(location)?;
    panchang_for_instant(eph, instant, location, config)
}

/// Bengali solar date at `instant` for `location`.
pub fn compute_solar_date<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    location: &GeoLocation,
    config: &SolarCalendarConfig,
) -> Result<SolarDate, SearchError> {
    check_location(location)?;
    solar_date(eph, instant, location, config)
}

/// Rahu Kalam, Yama Gandam, Gulika Kalam (day and night) and Abhijit
/// Muhurat for a local date.
pub fn compute_day_timings<E: EphemerisPort + ?Sized>(
    eph: &E,
    date: CivilDate,
    location: &GeoLocation,
) -> Result<DayTimingResult, SearchError> {
    check_location(location)?;
    day_timings(eph, date, location)
}
