use thiserror::Error;

/// Raised when a holiday rule is built from parameters that can never
/// describe a date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("day {day} does not exist in month {month}")]
    InvalidDayOfMonth {
        month: u32,
        day: u32
    },

    #[error("ordinal {0} must be within 1..=5 or -5..=-1")]
    InvalidOrdinal(i8),

    #[error("year range {start}..={end} is empty")]
    InvalidYearRange {
        start: i32,
        end: i32
    },

    #[error("cannot parse month-day from '{0}', expected --MM-DD")]
    MonthDayParse(String)
}

/// Checks a month number, shared by every rule keyed on a month.
pub(crate) fn ensure_month(month: u32) -> Result<(), HolidayError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(HolidayError::InvalidMonth(month))
    }
}
