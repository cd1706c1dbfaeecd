//! Civil (calendar) dates without a time of day.
//!
//! A `CivilDate` names a day; which 24 hours it covers depends on the
//! reference used to derive it. Two derivations are provided: local mean
//! time at a longitude (used for sunrise lookups) and a fixed UTC offset
//! (used for midnight-based calendar rules).

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::instant::Instant;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Days in each month of a common year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

impl CivilDate {
    /// Create a validated calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate {
                year,
                month,
                day,
                reason: "month must be 1-12",
            });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate {
                year,
                month,
                day,
                reason: "day outside month",
            });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Date at 0h UT of this date.
    pub fn jd_midnight(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Date containing the given Julian Date (UTC scale).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// UTC date of an instant.
    pub fn utc_date_of(instant: Instant) -> Self {
        Self::from_jd(instant.as_jd_utc())
    }

    /// Local-mean-time date of an instant at the given east longitude.
    pub fn local_mean_date(instant: Instant, longitude_deg: f64) -> Self {
        Self::from_jd(instant.as_jd_utc() + longitude_deg / 360.0)
    }

    /// Date of an instant in a fixed UTC offset (e.g. +330 for IST).
    pub fn in_offset(instant: Instant, utc_offset_minutes: i32) -> Self {
        Self::from_jd(instant.as_jd_utc() + utc_offset_minutes as f64 * 60.0 / SECONDS_PER_DAY)
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u8 {
        // JD 0h of a Sunday satisfies (jd + 1.5) mod 7 == 0.
        ((self.jd_midnight() + 1.5).round() as i64).rem_euclid(7) as u8
    }

    /// The following day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// Shift by a whole number of days.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jd(self.jd_midnight() + days as f64 + 0.5)
    }

    /// Whole days from `earlier` to `self`.
    pub fn days_since(self, earlier: CivilDate) -> i64 {
        (self.jd_midnight() - earlier.jd_midnight()).round() as i64
    }

    /// Instant of 0h at this date in a fixed UTC offset.
    pub fn midnight_in_offset(self, utc_offset_minutes: i32) -> Instant {
        Instant::from_jd_utc(self.jd_midnight())
            .plus_seconds(-(utc_offset_minutes as f64) * 60.0)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_month() {
        assert!(CivilDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn rejects_feb_30() {
        assert!(CivilDate::new(2024, 2, 30).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(1900, 2, 29).is_err());
        assert!(CivilDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn weekday_known_dates() {
        // 2024-04-14 was a Sunday, 2000-01-01 a Saturday.
        assert_eq!(CivilDate::new(2024, 4, 14).unwrap().weekday(), 0);
        assert_eq!(CivilDate::new(2024, 4, 15).unwrap().weekday(), 1);
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().weekday(), 6);
    }

    #[test]
    fn succ_and_pred_cross_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.succ(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.succ().pred(), d);
    }

    #[test]
    fn days_since_counts_whole_days() {
        let a = CivilDate::new(2024, 4, 14).unwrap();
        let b = CivilDate::new(2024, 5, 15).unwrap();
        assert_eq!(b.days_since(a), 31);
        assert_eq!(a.days_since(b), -31);
    }

    #[test]
    fn local_mean_date_east_of_greenwich() {
        // 23:42 UTC on the 13th is already the 14th in Kolkata mean time.
        let t = Instant::from_utc(2024, 4, 13, 23, 42, 0.0);
        assert_eq!(CivilDate::utc_date_of(t), CivilDate::new(2024, 4, 13).unwrap());
        assert_eq!(
            CivilDate::local_mean_date(t, 88.3639),
            CivilDate::new(2024, 4, 14).unwrap()
        );
    }

    #[test]
    fn offset_date_and_midnight() {
        let t = Instant::from_utc(2024, 4, 13, 18, 45, 0.0);
        let ist = CivilDate::in_offset(t, 330);
        assert_eq!(ist, CivilDate::new(2024, 4, 14).unwrap());
        let midnight = ist.midnight_in_offset(330).to_utc();
        assert_eq!((midnight.day, midnight.hour, midnight.minute), (13, 18, 30));
    }
}
