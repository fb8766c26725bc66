//! Day-of-year values — the unit of birthday comparison.
//!
//! A birthday is an ordinal position in a fixed 365-day year (leap years are
//! deliberately ignored). Equality, hashing, and ordering use the ordinal
//! alone; the calendar projection exists for display only.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{BirthdayError, Result};

/// Number of days in the (non-leap) simulation year.
pub const DAYS_IN_YEAR: u16 = 365;

/// Reference year used to derive (month, day) for display. Any non-leap year
/// works; it never participates in comparison.
const REFERENCE_YEAR: i32 = 2001;

/// A calendar day identified by its ordinal position (1..=365) within a
/// non-leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DayOfYear(pub(crate) u16);

impl DayOfYear {
    /// Construct from a 1-based ordinal.
    ///
    /// # Errors
    /// Returns [`BirthdayError::InvalidDayOfYear`] if `ordinal` is outside
    /// `1..=365`.
    pub fn new(ordinal: u16) -> Result<Self> {
        if (1..=DAYS_IN_YEAR).contains(&ordinal) {
            Ok(Self(ordinal))
        } else {
            Err(BirthdayError::InvalidDayOfYear(ordinal))
        }
    }

    /// The 1-based ordinal position within the year.
    pub fn ordinal(self) -> u16 {
        self.0
    }

    /// Calendar projection into the fixed reference year.
    pub fn to_date(self) -> NaiveDate {
        // The constructor guarantees 1..=365, always valid in a non-leap year.
        NaiveDate::from_yo_opt(REFERENCE_YEAR, u32::from(self.0))
            .expect("ordinal in 1..=365 is a valid non-leap day")
    }

    /// (month, day-of-month) in the reference year, for display.
    pub fn month_day(self) -> (u32, u32) {
        let date = self.to_date();
        (date.month(), date.day())
    }
}

impl fmt::Display for DayOfYear {
    /// Renders as abbreviated month plus day, e.g. `Mar 4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_date().format("%b %-d"))
    }
}
