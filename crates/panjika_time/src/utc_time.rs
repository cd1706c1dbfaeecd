//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar-component view of an [`Instant`].

use crate::instant::Instant;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_j2000_seconds};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to an absolute instant.
    ///
    /// The whole-day part goes through the calendar conversion and the time
    /// of day is added in seconds, so no precision is lost to a large JD.
    pub fn to_instant(&self) -> Instant {
        let midnight_jd = calendar_to_jd(self.year, self.month, self.day as f64);
        let seconds_of_day =
            self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second;
        Instant::from_j2000_seconds(jd_to_j2000_seconds(midnight_jd) + seconds_of_day)
    }

    /// Convert an instant back to calendar components (microsecond rounding).
    pub fn from_instant(instant: Instant) -> Self {
        let jd = instant.as_jd_utc();
        let mut midnight_jd = (jd + 0.5).floor() - 0.5;
        let mut seconds_of_day = instant.as_j2000_seconds() - jd_to_j2000_seconds(midnight_jd);
        seconds_of_day = (seconds_of_day * 1e6).round() / 1e6;
        if seconds_of_day >= SECONDS_PER_DAY {
            midnight_jd += 1.0;
            seconds_of_day -= SECONDS_PER_DAY;
        } else if seconds_of_day < 0.0 {
            midnight_jd -= 1.0;
            seconds_of_day += SECONDS_PER_DAY;
        }

        let (year, month, day_frac) = jd_to_calendar(midnight_jd);
        let day = day_frac.round() as u32;
        let hour = (seconds_of_day / 3600.0).floor() as u32;
        let minute = ((seconds_of_day % 3600.0) / 60.0).floor() as u32;
        let second = seconds_of_day % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
