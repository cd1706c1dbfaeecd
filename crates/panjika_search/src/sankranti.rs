//! Sankranti search and Bengali solar date derivation.
//!
//! A Sankranti is the instant the sidereal Sun crosses a multiple of 30°.
//! The solar month it opens starts on day 1 according to the configured
//! [`SankrantiRollover`], and the day of month counts day boundaries from
//! there.

use log::debug;
use panjika_base::{BengaliMonth, bangabda_year, normalize_360, segment_index};
use panjika_core::{EphemerisPort, GeoLocation};
use panjika_time::{CivilDate, Instant};

use crate::error::SearchError;
use crate::panchang::{sunrise_on, vedic_day_sunrises};
use crate::sankranti_types::{SankrantiEvent, SankrantiRollover, SolarCalendarConfig, SolarDate};
use crate::transition::find_transition;
use crate::transition_types::{SUN_RATE_DEG_PER_DAY, SearchDirection, TransitionConfig};

/// Span of one rashi in degrees.
const RASHI_SPAN_DEG: f64 = 30.0;

/// Step past a found Sankranti before searching for its neighbour, days.
const SANKRANTI_STEP_DAYS: f64 = 1.0;

/// Sidereal Sun longitude at an instant, degrees [0, 360).
pub fn sun_longitude_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
) -> Result<f64, SearchError> {
    Ok(normalize_360(eph.longitudes(instant)?.sun_deg))
}

fn rashi_of(sun_deg: f64) -> Result<u32, SearchError> {
    Ok(segment_index(normalize_360(sun_deg), RASHI_SPAN_DEG)?.min(11))
}

fn event_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    rashi_index: u32,
) -> Result<SankrantiEvent, SearchError> {
    Ok(SankrantiEvent {
        instant,
        rashi_index,
        sun_longitude_deg: sun_longitude_at(eph, instant)?,
    })
}

/// Most recent Sankranti at or before `instant`.
pub fn prev_sankranti<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    config: &TransitionConfig,
) -> Result<SankrantiEvent, SearchError> {
    let sun = sun_longitude_at(eph, instant)?;
    let rashi = rashi_of(sun)?;
    let found = find_transition(
        |t| sun_longitude_at(eph, t),
        instant,
        sun,
        rashi as f64 * RASHI_SPAN_DEG,
        SUN_RATE_DEG_PER_DAY,
        SearchDirection::Backward,
        config,
    )?;
    event_at(eph, found, rashi)
}

/// Next Sankranti after `instant`.
pub fn next_sankranti<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    config: &TransitionConfig,
) -> Result<SankrantiEvent, SearchError> {
    let sun = sun_longitude_at(eph, instant)?;
    let rashi = (rashi_of(sun)? + 1) % 12;
    let found = find_transition(
        |t| sun_longitude_at(eph, t),
        instant,
        sun,
        rashi as f64 * RASHI_SPAN_DEG,
        SUN_RATE_DEG_PER_DAY,
        SearchDirection::Forward,
        config,
    )?;
    event_at(eph, found, rashi)
}

/// All Sankrantis in `[start, end]`, in time order.
pub fn search_sankrantis<E: EphemerisPort + ?Sized>(
    eph: &E,
    start: Instant,
    end: Instant,
    config: &TransitionConfig,
) -> Result<Vec<SankrantiEvent>, SearchError> {
    let mut events = Vec::new();
    let mut cursor = start;
    loop {
        let event = next_sankranti(eph, cursor, config)?;
        if event.instant > end {
            break;
        }
        cursor = event.instant.plus_days(SANKRANTI_STEP_DAYS);
        events.push(event);
    }
    Ok(events)
}

/// Civil date and instant at which day 1 of the month opened by
/// `sankranti` begins.
pub fn month_start<E: EphemerisPort + ?Sized>(
    eph: &E,
    sankranti: &SankrantiEvent,
    location: &GeoLocation,
    rollover: SankrantiRollover,
) -> Result<(CivilDate, Instant), SearchError> {
    match rollover {
        SankrantiRollover::Sunrise => {
            let date = CivilDate::local_mean_date(sankranti.instant, location.longitude_deg);
            let sunrise = sunrise_on(eph, date, location)?;
            if sankranti.instant <= sunrise {
                Ok((date, sunrise))
            } else {
                let next = date.succ();
                Ok((next, sunrise_on(eph, next, location)?))
            }
        }
        SankrantiRollover::Midnight { utc_offset_minutes } => {
            let day1 = CivilDate::in_offset(sankranti.instant, utc_offset_minutes).succ();
            Ok((day1, day1.midnight_in_offset(utc_offset_minutes)))
        }
    }
}

/// Bengali solar date of `instant` at `location`.
///
/// When the instant falls between a Sankranti and the start of the month's
/// day 1 it still belongs to the previous month.
pub fn solar_date<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    location: &GeoLocation,
    config: &SolarCalendarConfig,
) -> Result<SolarDate, SearchError> {
    config.validate()?;

    let mut sankranti = prev_sankranti(eph, instant, &config.transition)?;
    let (mut start_date, mut start) = month_start(eph, &sankranti, location, config.rollover)?;
    if instant < start {
        let earlier = sankranti.instant.plus_days(-SANKRANTI_STEP_DAYS);
        sankranti = prev_sankranti(eph, earlier, &config.transition)?;
        (start_date, start) = month_start(eph, &sankranti, location, config.rollover)?;
    }

    let query_date = match config.rollover {
        SankrantiRollover::Sunrise => vedic_day_sunrises(eph, instant, location)?.date,
        SankrantiRollover::Midnight { utc_offset_minutes } => {
            CivilDate::in_offset(instant, utc_offset_minutes)
        }
    };
    let day = (query_date.days_since(start_date) + 1).max(1) as u32;

    let month = BengaliMonth::from_rashi_index(sankranti.rashi_index);
    let year = bangabda_year(month, start_date.year, config.bengali_era_offset);

    debug!(
        "solar date at {instant}: {} {day}, {year} (sankranti {}, day 1 {start_date})",
        month.name(),
        sankranti.instant
    );

    Ok(SolarDate {
        month,
        day,
        year,
        sankranti,
        month_start: start,
        month_start_date: start_date,
    })
}
