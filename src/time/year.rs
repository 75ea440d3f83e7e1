use std::fmt;

use chrono::Datelike;
use serde::{
    Deserialize,
    Serialize
};

use super::utility::is_leap;
use super::yearerror::YearError;

/// Proleptic Gregorian year number. Every `i32` is a valid year,
/// so the supported range is `Year::MIN..=Year::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Year(i32);

impl Year {
    pub const MIN: Year = Year(i32::MIN);
    pub const MAX: Year = Year(i32::MAX);

    pub const fn new(year: i32) -> Year {
        Year(year)
    }

    pub fn of<D: Datelike>(date: &D) -> Year {
        Year(date.year())
    }

    pub const fn number(&self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_leap(&self) -> bool {
        is_leap(self.0)
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Year {
        Year(year)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> i32 {
        year.0
    }
}

impl TryFrom<i64> for Year {
    type Error = YearError;

    fn try_from(received: i64) -> Result<Year, YearError> {
        i32::try_from(received).map(Year).map_err(|_| {
            tracing::debug!(received, "rejecting year outside i32 range");
            YearError::OutOfRange { received }
        })
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
