//! Error types for calendar and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or converting calendar dates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar components do not name a real date.
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate {
                year,
                month,
                day,
                reason,
            } => write!(f, "invalid date {year:04}-{month:02}-{day:02}: {reason}"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_date() {
        let e = TimeError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
            reason: "day outside month",
        };
        assert_eq!(e.to_string(), "invalid date 2024-02-30: day outside month");
    }
}
