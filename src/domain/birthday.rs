//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted from user input (`dd/mm/YYYY`).
pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A contact's birthday: a calendar date with no time-of-day.
///
/// Holding a `NaiveDate` means the value is a real calendar date by
/// construction. Text is only turned into a birthday through [`Birthday::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Wrap an already valid calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a birthday from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the triple is not a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parse user input in `dd/mm/YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not name a date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Days from `today` until the next anniversary strictly after `today`.
    ///
    /// An anniversary falling on `today` counts as already passed, so the
    /// result is the length of the coming year (365 or 366), never 0.
    /// A 29 February birthday is observed on 28 February in common years.
    pub fn days_until_next(&self, today: NaiveDate) -> u32 {
        let this_year = self.occurrence_in(today.year());
        let next = if this_year > today {
            this_year
        } else {
            self.occurrence_in(today.year() + 1)
        };
        // `next` is strictly after `today`, so the difference is positive.
        (next - today).num_days() as u32
    }

    /// The anniversary of this birthday in `year`.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
