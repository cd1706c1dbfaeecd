//! Rahu Kalam, Yama Gandam, Gulika Kalam and Abhijit Muhurat.
//!
//! Daytime and night are each cut into equal parts; weekday tables from
//! [`panjika_base::kalam`] pick the part for every segment.

use log::debug;
use panjika_base::{ABHIJIT_PART, DomainError, KALAM_PARTS, Kalam, MUHURTA_PARTS, Vaar};
use panjika_core::{EphemerisPort, GeoLocation};
use panjika_time::{CivilDate, Instant};

use crate::day_timing_types::{DaySegmentKind, DayTimingResult, DayTimingSegment};
use crate::error::SearchError;
use crate::panchang::sunrise_on;

/// Part `index` (0-based) of `[start, end)` cut into `parts` equal pieces.
pub fn segment_of(
    start: Instant,
    end: Instant,
    parts: u32,
    index: u32,
) -> Result<(Instant, Instant), SearchError> {
    if parts == 0 || index >= parts {
        return Err(DomainError::InvalidConfig("segment index outside partition").into());
    }
    let span = end.seconds_since(start);
    if !span.is_finite() || span <= 0.0 {
        return Err(DomainError::NonPositiveSpan(span).into());
    }
    let width = span / parts as f64;
    Ok((
        start.plus_seconds(width * index as f64),
        start.plus_seconds(width * (index + 1) as f64),
    ))
}

fn segment(
    kind: DaySegmentKind,
    start: Instant,
    end: Instant,
    parts: u32,
    index: u32,
) -> Result<DayTimingSegment, SearchError> {
    let (start, end) = segment_of(start, end, parts, index)?;
    Ok(DayTimingSegment { kind, start, end })
}

/// Day segments for `date` at `location`.
///
/// Fails with [`SearchError::DataUnavailable`] when the Sun does not both
/// rise and set on `date` or does not rise on the following date.
pub fn day_timings<E: EphemerisPort + ?Sized>(
    eph: &E,
    date: CivilDate,
    location: &GeoLocation,
) -> Result<DayTimingResult, SearchError> {
    let (sunrise, sunset) = eph
        .sunrise_sunset(date, location)?
        .regular()
        .ok_or(SearchError::DataUnavailable(
            "sun does not rise and set on this date",
        ))?;
    let next_sunrise = sunrise_on(eph, date.succ(), location)?;

    let weekday = date.weekday();
    let day_kalam = |kalam: Kalam| {
        segment(
            DaySegmentKind::Day(kalam),
            sunrise,
            sunset,
            KALAM_PARTS,
            kalam.part_for_weekday(weekday),
        )
    };
    let night_kalam = |kalam: Kalam| {
        segment(
            DaySegmentKind::Night(kalam),
            sunset,
            next_sunrise,
            KALAM_PARTS,
            kalam.part_for_weekday(weekday),
        )
    };

    let result = DayTimingResult {
        date,
        weekday: Vaar::from_weekday_index(weekday),
        sunrise,
        sunset,
        next_sunrise,
        rahu_kalam: day_kalam(Kalam::RahuKalam)?,
        yama_gandam: day_kalam(Kalam::YamaGandam)?,
        gulika_kalam: day_kalam(Kalam::GulikaKalam)?,
        night_rahu_kalam: night_kalam(Kalam::RahuKalam)?,
        night_yama_gandam: night_kalam(Kalam::YamaGandam)?,
        night_gulika_kalam: night_kalam(Kalam::GulikaKalam)?,
        abhijit_muhurat: segment(
            DaySegmentKind::AbhijitMuhurat,
            sunrise,
            sunset,
            MUHURTA_PARTS,
            ABHIJIT_PART,
        )?,
    };

    debug!(
        "day timings {date}: sunrise={sunrise} sunset={sunset} rahu={}..{}",
        result.rahu_kalam.start, result.rahu_kalam.end
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_to_six() -> (Instant, Instant) {
        (
            Instant::from_utc(2024, 1, 1, 6, 0, 0.0),
            Instant::from_utc(2024, 1, 1, 18, 0, 0.0),
        )
    }

    #[test]
    fn abhijit_is_eighth_muhurta() {
        let (rise, set) = six_to_six();
        let (s, e) = segment_of(rise, set, MUHURTA_PARTS, ABHIJIT_PART).unwrap();
        let (s, e) = (s.to_utc(), e.to_utc());
        assert_eq!((s.hour, s.minute), (11, 36));
        assert_eq!((e.hour, e.minute), (12, 24));
    }

    #[test]
    fn parts_tile_the_span() {
        let (rise, set) = six_to_six();
        let mut prev_end = rise;
        for i in 0..KALAM_PARTS {
            let (s, e) = segment_of(rise, set, KALAM_PARTS, i).unwrap();
            assert!((s.seconds_since(prev_end)).abs() < 1e-6);
            assert!((e.seconds_since(s) - 5400.0).abs() < 1e-6);
            prev_end = e;
        }
        assert!(prev_end.seconds_since(set).abs() < 1e-6);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (rise, set) = six_to_six();
        assert!(segment_of(rise, set, 8, 8).is_err());
        assert!(segment_of(rise, set, 0, 0).is_err());
    }

    #[test]
    fn rejects_reversed_span() {
        let (rise, set) = six_to_six();
        let err = segment_of(set, rise, 8, 0).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Domain(DomainError::NonPositiveSpan(_))
        ));
    }
}
