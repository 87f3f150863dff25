/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month in a common year, indexed by month number (index 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between date components (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a span (`start/end`)
pub const RANGE_SEPARATOR: char = '/';

/// Digits in each `YYYY-MM-DD` component
pub(crate) const YEAR_DIGITS: usize = 4;
pub(crate) const MONTH_DIGITS: usize = 2;
pub(crate) const DAY_DIGITS: usize = 2;

/// Colour painted on selected days unless configured otherwise
pub const DEFAULT_SELECTION_COLOR: &str = "#5BA7B6";

/// Marking style the calendar widget needs to draw connected ranges
pub const PERIOD_MARKING: &str = "period";
