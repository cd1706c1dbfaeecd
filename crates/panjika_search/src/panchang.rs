//! Panchang element computation with root-found start/end times.
//!
//! The four angular elements are classified from one longitude fetch and
//! their boundaries are found with [`find_transition`] on the element's own
//! angle (elongation for tithi/karana, Moon longitude for nakshatra,
//! Sun + Moon for yoga). Vaar is bounded by local sunrises from the port.

use log::debug;
use panjika_base::{
    DomainError, Element, Karana, Nakshatra, Tithi, Vaar, Yoga, elongation, karana_index,
    longitude_sum, nakshatra_index, nakshatra_pada, normalize_360, tithi_index, yoga_index,
};
use panjika_core::{EphemerisPort, GeoLocation, Longitudes};
use panjika_time::{CivilDate, Instant};

use crate::error::SearchError;
use crate::panchang_types::{
    ElementState, KaranaInfo, NakshatraInfo, PanchangConfig, PanchangResult, TithiInfo, VaarInfo,
    VedicDay, YogaInfo,
};
use crate::transition::find_transition;
use crate::transition_types::{
    ELONGATION_RATE_DEG_PER_DAY, LONGITUDE_SUM_RATE_DEG_PER_DAY, MOON_RATE_DEG_PER_DAY,
    SearchDirection,
};

/// Moon-Sun elongation at an instant, degrees [0, 360).
pub fn elongation_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
) -> Result<f64, SearchError> {
    let lon = eph.longitudes(instant)?;
    Ok(elongation(lon.sun_deg, lon.moon_deg))
}

/// Sidereal Moon longitude at an instant, degrees [0, 360).
pub fn moon_longitude_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
) -> Result<f64, SearchError> {
    Ok(normalize_360(eph.longitudes(instant)?.moon_deg))
}

/// Sidereal Sun + Moon longitude sum at an instant, degrees [0, 360).
pub fn longitude_sum_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
) -> Result<f64, SearchError> {
    let lon = eph.longitudes(instant)?;
    Ok(longitude_sum(lon.sun_deg, lon.moon_deg))
}

/// Sunrise on a local date, or `DataUnavailable` when the Sun does not rise
/// and set that day.
pub(crate) fn sunrise_on<E: EphemerisPort + ?Sized>(
    eph: &E,
    date: CivilDate,
    location: &GeoLocation,
) -> Result<Instant, SearchError> {
    eph.sunrise_sunset(date, location)?
        .regular()
        .map(|(sunrise, _)| sunrise)
        .ok_or(SearchError::DataUnavailable("no sunrise on this date"))
}

/// Attach spillover neighbours when a boundary is within the window.
fn with_spillover(
    mut state: ElementState,
    instant: Instant,
    config: &PanchangConfig,
) -> ElementState {
    let window = config.spillover_window_seconds();
    if window > 0.0 {
        if state.end.seconds_since(instant) <= window {
            state.next = Some(state.element.next_index(state.index));
        }
        if instant.seconds_since(state.start) <= window {
            state.previous = Some(state.element.previous_index(state.index));
        }
    }
    state
}

/// Root-find the boundaries of segment `index` of an angular element.
fn angular_state<F>(
    mut angle_fn: F,
    element: Element,
    index: u32,
    instant: Instant,
    current_deg: f64,
    rate_deg_per_day: f64,
    config: &PanchangConfig,
) -> Result<ElementState, SearchError>
where
    F: FnMut(Instant) -> Result<f64, SearchError>,
{
    let span = element
        .span_deg()
        .ok_or(DomainError::InvalidConfig("element has no angular span"))?;
    let start_target = normalize_360((index - 1) as f64 * span);
    let end_target = normalize_360(index as f64 * span);

    let start = find_transition(
        &mut angle_fn,
        instant,
        current_deg,
        start_target,
        rate_deg_per_day,
        SearchDirection::Backward,
        &config.transition,
    )?;
    let end = find_transition(
        &mut angle_fn,
        instant,
        current_deg,
        end_target,
        rate_deg_per_day,
        SearchDirection::Forward,
        &config.transition,
    )?;

    let state = ElementState {
        element,
        index,
        start,
        end,
        previous: None,
        next: None,
    };
    Ok(with_spillover(state, instant, config))
}

/// Tithi at `instant` from pre-fetched longitudes.
///
/// The port is still needed for the boundary searches.
pub fn tithi_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    lon: Longitudes,
    config: &PanchangConfig,
) -> Result<TithiInfo, SearchError> {
    let index = tithi_index(lon.sun_deg, lon.moon_deg)?;
    let state = angular_state(
        |t| elongation_at(eph, t),
        Element::Tithi,
        index,
        instant,
        elongation(lon.sun_deg, lon.moon_deg),
        ELONGATION_RATE_DEG_PER_DAY,
        config,
    )?;
    let tithi = Tithi::from_index(index);
    Ok(TithiInfo {
        state,
        tithi,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.tithi_in_paksha(),
    })
}

/// Karana (half-tithi) at `instant` from pre-fetched longitudes.
pub fn karana_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    lon: Longitudes,
    config: &PanchangConfig,
) -> Result<KaranaInfo, SearchError> {
    let index = karana_index(lon.sun_deg, lon.moon_deg)?;
    let state = angular_state(
        |t| elongation_at(eph, t),
        Element::Karana,
        index,
        instant,
        elongation(lon.sun_deg, lon.moon_deg),
        ELONGATION_RATE_DEG_PER_DAY,
        config,
    )?;
    Ok(KaranaInfo {
        state,
        karana: Karana::from_index(index),
    })
}

/// Moon's nakshatra at `instant` from pre-fetched longitudes.
pub fn nakshatra_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    lon: Longitudes,
    config: &PanchangConfig,
) -> Result<NakshatraInfo, SearchError> {
    let index = nakshatra_index(lon.moon_deg)?;
    let state = angular_state(
        |t| moon_longitude_at(eph, t),
        Element::Nakshatra,
        index,
        instant,
        normalize_360(lon.moon_deg),
        MOON_RATE_DEG_PER_DAY,
        config,
    )?;
    Ok(NakshatraInfo {
        state,
        nakshatra: Nakshatra::from_index(index),
        pada: nakshatra_pada(lon.moon_deg)?,
    })
}

/// Yoga at `instant` from pre-fetched longitudes.
pub fn yoga_at<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    lon: Longitudes,
    config: &PanchangConfig,
) -> Result<YogaInfo, SearchError> {
    let index = yoga_index(lon.sun_deg, lon.moon_deg)?;
    let state = angular_state(
        |t| longitude_sum_at(eph, t),
        Element::Yoga,
        index,
        instant,
        longitude_sum(lon.sun_deg, lon.moon_deg),
        LONGITUDE_SUM_RATE_DEG_PER_DAY,
        config,
    )?;
    Ok(YogaInfo {
        state,
        yoga: Yoga::from_index(index),
    })
}

/// Local sunrises bracketing `instant`.
///
/// If `instant` is at or after today's sunrise the day runs from today's
/// sunrise to tomorrow's; otherwise from yesterday's sunrise to today's.
/// "Today" is the local mean time date at the location's longitude.
pub fn vedic_day_sunrises<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    location: &GeoLocation,
) -> Result<VedicDay, SearchError> {
    let date = CivilDate::local_mean_date(instant, location.longitude_deg);
    let sunrise = sunrise_on(eph, date, location)?;
    if instant >= sunrise {
        let next_sunrise = sunrise_on(eph, date.succ(), location)?;
        Ok(VedicDay {
            date,
            sunrise,
            next_sunrise,
        })
    } else {
        let prev = date.pred();
        Ok(VedicDay {
            date: prev,
            sunrise: sunrise_on(eph, prev, location)?,
            next_sunrise: sunrise,
        })
    }
}

/// Vaar of a Vedic day: the weekday of the date whose sunrise opens it.
pub fn vaar_at(day: &VedicDay, instant: Instant, config: &PanchangConfig) -> VaarInfo {
    let weekday = day.date.weekday();
    let state = ElementState {
        element: Element::Vara,
        index: u32::from(weekday),
        start: day.sunrise,
        end: day.next_sunrise,
        previous: None,
        next: None,
    };
    VaarInfo {
        state: with_spillover(state, instant, config),
        vaar: Vaar::from_weekday_index(weekday),
        date: day.date,
    }
}

/// Complete panchang for a moment and place.
///
/// Longitudes are fetched once for classification; each boundary search
/// then queries the port as needed. Any port or convergence failure aborts
/// the whole query.
pub fn panchang_for_instant<E: EphemerisPort + ?Sized>(
    eph: &E,
    instant: Instant,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<PanchangResult, SearchError> {
    config.validate()?;
    let lon = eph.longitudes(instant)?;

    let tithi = tithi_at(eph, instant, lon, config)?;
    let karana = karana_at(eph, instant, lon, config)?;
    let nakshatra = nakshatra_at(eph, instant, lon, config)?;
    let yoga = yoga_at(eph, instant, lon, config)?;
    let day = vedic_day_sunrises(eph, instant, location)?;
    let vaar = vaar_at(&day, instant, config);

    debug!(
        "panchang at {instant}: tithi={} nakshatra={} yoga={} karana={} vaar={}",
        tithi.state.index,
        nakshatra.state.index,
        yoga.state.index,
        karana.state.index,
        vaar.state.index
    );

    Ok(PanchangResult {
        instant,
        sun_longitude_deg: lon.sun_deg,
        moon_longitude_deg: lon.moon_deg,
        tithi,
        nakshatra,
        yoga,
        karana,
        vaar,
    })
}
