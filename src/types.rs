use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether this is the last month of the year
    pub const fn is_december(self) -> bool {
        self.get() == DECEMBER
    }

    /// The following month, wrapping December to January.
    pub fn wrapping_succ(self) -> Self {
        let next = if self.is_december() {
            JANUARY
        } else {
            self.get() + 1
        };
        Self::new(next).unwrap_or(self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month, valid for the year and month it was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let day = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }
        Ok(Self(day))
    }

    /// The first day of any month
    pub const fn first() -> Self {
        match NonZeroU8::new(MIN_DAY) {
            Some(day) => Self(day),
            None => unreachable!(),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether this is the final day of `month` in `year`
    pub const fn is_last_of(self, year: Year, month: Month) -> bool {
        self.get() >= days_in_month(year.get(), month.get())
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, accounting for leap years
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
