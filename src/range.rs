use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive run of calendar days, `start..=end`.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateSpan {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date span operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the two dates.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid span format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateSpan {
    /// Creates a span from its two ends.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A span covering one day.
    pub const fn single(date: CalendarDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    /// First day of the span.
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Last day of the span.
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Whether `date` falls inside the span, ends included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the span in ascending order, both ends included.
    pub fn days(&self) -> Days {
        Days {
            next:      Some(self.start),
            last:      self.end,
            inclusive: true,
        }
    }

    /// Days strictly between the two ends, ascending.
    pub fn interior(&self) -> Days {
        Days {
            next:      self.start.succ(),
            last:      self.end,
            inclusive: false,
        }
    }

    /// Number of days in the span, both ends included.
    pub fn len_days(&self) -> usize {
        self.days().count()
    }
}

/// Ascending iterator over calendar days, produced by [`DateSpan::days`]
/// and [`DateSpan::interior`].
#[derive(Debug, Clone)]
pub struct Days {
    next:      Option<CalendarDate>,
    last:      CalendarDate,
    inclusive: bool,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self
            .next
            .filter(|d| *d < self.last || (self.inclusive && *d == self.last))?;
        self.next = current.succ();
        Some(current)
    }
}

impl FusedIterator for Days {}

impl FromStr for DateSpan {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((start, end)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: {s}"
            )));
        }

        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
