//! Absolute UTC instants.

use std::fmt::{Display, Formatter};

use crate::julian::{SECONDS_PER_DAY, j2000_seconds_to_jd, jd_to_j2000_seconds};
use crate::utc_time::UtcTime;

/// A point in time, stored as UTC seconds past J2000.0.
///
/// This is the instant type consumed and produced by every engine in the
/// workspace. It is never a naive local time: local dates are derived from
/// it explicitly with a longitude or a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    utc_seconds: f64,
}

impl Instant {
    /// Create an instant from UTC seconds past J2000.0.
    pub fn from_j2000_seconds(s: f64) -> Self {
        Self { utc_seconds: s }
    }

    /// Create an instant from a Julian Date on the UTC scale.
    pub fn from_jd_utc(jd: f64) -> Self {
        Self {
            utc_seconds: jd_to_j2000_seconds(jd),
        }
    }

    /// Create an instant from UTC calendar components.
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        UtcTime::new(year, month, day, hour, minute, second).to_instant()
    }

    /// UTC seconds past J2000.0.
    pub fn as_j2000_seconds(self) -> f64 {
        self.utc_seconds
    }

    /// Julian Date on the UTC scale.
    pub fn as_jd_utc(self) -> f64 {
        j2000_seconds_to_jd(self.utc_seconds)
    }

    /// UTC calendar components.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_instant(self)
    }

    pub fn plus_seconds(self, seconds: f64) -> Self {
        Self {
            utc_seconds: self.utc_seconds + seconds,
        }
    }

    pub fn plus_days(self, days: f64) -> Self {
        self.plus_seconds(days * SECONDS_PER_DAY)
    }

    /// Signed number of seconds from `earlier` to `self`.
    pub fn seconds_since(self, earlier: Instant) -> f64 {
        self.utc_seconds - earlier.utc_seconds
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.seconds_since(earlier) / SECONDS_PER_DAY
    }

    /// Point `fraction` of the way from `self` to `other`.
    pub fn lerp(self, other: Instant, fraction: f64) -> Self {
        Self {
            utc_seconds: self.utc_seconds + (other.utc_seconds - self.utc_seconds) * fraction,
        }
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utc())
    }
}

#[cfg(feature = "chrono")]
mod chrono_interop {
    use chrono::{DateTime, TimeZone, Utc};

    use super::Instant;

    /// Unix time of J2000.0 (2000-01-01T12:00:00Z).
    const J2000_UNIX_SECONDS: i64 = 946_728_000;

    impl From<DateTime<Utc>> for Instant {
        fn from(dt: DateTime<Utc>) -> Self {
            let whole = (dt.timestamp() - J2000_UNIX_SECONDS) as f64;
            let nanos = dt.timestamp_subsec_nanos() as f64 * 1e-9;
            Instant::from_j2000_seconds(whole + nanos)
        }
    }

    impl Instant {
        /// Convert to a `chrono` UTC timestamp, rounded to the nearest millisecond.
        ///
        /// Returns `None` when the instant is outside chrono's range.
        pub fn to_chrono(self) -> Option<DateTime<Utc>> {
            let millis = (self.as_j2000_seconds() * 1000.0).round() as i64;
            Utc.timestamp_millis_opt(J2000_UNIX_SECONDS * 1000 + millis)
                .single()
        }
    }
}
