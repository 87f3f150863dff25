//! Date-range selection for calendar pickers that have sold-out dates.
//!
//! A [`RangePicker`] owns the selection state (start, end and the nearest
//! blocking date) and derives the [`MarkingMap`] a calendar widget paints from
//! it. Disabled dates are injected through a [`DisabledDateSet`] or a
//! [`PickerConfig`].

mod config;
mod consts;
mod disabled;
mod marking;
mod prelude;
mod props;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use config::{AfterRange, ConfigError, PickerConfig};
pub use consts::*;
pub use disabled::DisabledDateSet;
pub use marking::{Marking, MarkingMap, build_range};
pub use props::{CalendarLayout, CalendarProps};
pub use range::{DateSpan, Days, RangeError};
pub use selection::{PickOutcome, RangePicker, SelectionState};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::Datelike;
use std::str::FromStr;

/// A single calendar day, always a valid Gregorian date.
///
/// Ordering is chronological. The textual form is the fixed-width
/// `YYYY-MM-DD` used as a key by calendar widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date out of supported range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Builds a date from its numeric components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The following calendar day, rolling over months and years.
    /// Returns `None` after `9999-12-31`.
    pub fn succ(self) -> Option<Self> {
        if !self.day.is_last_of(self.year, self.month) {
            let day = Day::new(self.day.get() + 1, self.year, self.month).ok()?;
            return Some(Self { day, ..self });
        }
        let year = if self.month.is_december() {
            self.year.succ()?
        } else {
            self.year
        };
        Some(Self {
            year,
            month: self.month.wrapping_succ(),
            day: Day::first(),
        })
    }

    /// The current date on the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the clock reads a year outside `1..=9999`.
    pub fn today() -> Result<Self, ParseError> {
        chrono::Local::now().date_naive().try_into()
    }

    fn parse_component(part: &str, digits: usize, input: &str) -> Result<u16, ParseError> {
        if part.len() != digits || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(input.to_owned()));
        }
        part.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
    }

    fn narrow(value: u16, input: &str) -> Result<u8, ParseError> {
        u8::try_from(value).map_err(|_| ParseError::InvalidFormat(input.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = Self::parse_component(year, YEAR_DIGITS, trimmed)?;
        let month = Self::narrow(Self::parse_component(month, MONTH_DIGITS, trimmed)?, trimmed)?;
        let day = Self::narrow(Self::parse_component(day, DAY_DIGITS, trimmed)?, trimmed)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let out_of_range = || ParseError::OutOfRange(value.to_string());
        let year = u16::try_from(value.year()).map_err(|_| out_of_range())?;
        let month = u8::try_from(value.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(value.day()).map_err(|_| out_of_range())?;
        Self::new(year, month, day).map_err(|_| out_of_range())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
