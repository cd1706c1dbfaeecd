//! Types for sunrise-anchored day segments.

use panjika_base::{Kalam, Vaar};
use panjika_time::{CivilDate, Instant};

/// Which segment a [`DayTimingSegment`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySegmentKind {
    /// A weekday segment of daytime (sunrise to sunset).
    Day(Kalam),
    /// A weekday segment of night (sunset to next sunrise).
    Night(Kalam),
    /// The eighth of fifteen daytime muhurtas.
    AbhijitMuhurat,
}

impl DaySegmentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Day(Kalam::RahuKalam) => "Rahu Kalam",
            Self::Day(Kalam::YamaGandam) => "Yama Gandam",
            Self::Day(Kalam::GulikaKalam) => "Gulika Kalam",
            Self::Night(Kalam::RahuKalam) => "Night Rahu Kalam",
            Self::Night(Kalam::YamaGandam) => "Night Yama Gandam",
            Self::Night(Kalam::GulikaKalam) => "Night Gulika Kalam",
            Self::AbhijitMuhurat => "Abhijit Muhurat",
        }
    }
}

/// A labelled time segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimingSegment {
    pub kind: DaySegmentKind,
    /// Segment start (UTC).
    pub start: Instant,
    /// Segment end (UTC).
    pub end: Instant,
}

impl DayTimingSegment {
    pub fn duration_seconds(&self) -> f64 {
        self.end.seconds_since(self.start)
    }
}

/// Day segments for one local date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimingResult {
    /// Local date the segments belong to.
    pub date: CivilDate,
    /// Weekday of `date`.
    pub weekday: Vaar,
    pub sunrise: Instant,
    pub sunset: Instant,
    /// Sunrise of the following date; closes the night half.
    pub next_sunrise: Instant,
    pub rahu_kalam: DayTimingSegment,
    pub yama_gandam: DayTimingSegment,
    pub gulika_kalam: DayTimingSegment,
    pub night_rahu_kalam: DayTimingSegment,
    pub night_yama_gandam: DayTimingSegment,
    pub night_gulika_kalam: DayTimingSegment,
    pub abhijit_muhurat: DayTimingSegment,
}

impl DayTimingResult {
    /// All seven segments, day segments first.
    pub fn segments(&self) -> [DayTimingSegment; 7] {
        [
            self.rahu_kalam,
            self.yama_gandam,
            self.gulika_kalam,
            self.abhijit_muhurat,
            self.night_rahu_kalam,
            self.night_yama_gandam,
            self.night_gulika_kalam,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_distinguish_day_and_night() {
        assert_eq!(DaySegmentKind::Day(Kalam::RahuKalam).label(), "Rahu Kalam");
        assert_eq!(
            DaySegmentKind::Night(Kalam::RahuKalam).label(),
            "Night Rahu Kalam"
        );
        assert_eq!(DaySegmentKind::AbhijitMuhurat.label(), "Abhijit Muhurat");
    }
}
