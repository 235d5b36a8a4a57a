use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Next,
    Previous
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDirection::Next => write!(f, "next"),
            SearchDirection::Previous => write!(f, "previous")
        }
    }
}

/// Failures of the calendar date-arithmetic engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A range query was given a start date after its end date.
    #[error("invalid date range: {from} is after {to}")]
    InvalidRange {
        from: NaiveDate,
        to: NaiveDate
    },

    /// No business day was found within the search cap. Usually the rule
    /// set marks every day as a holiday.
    #[error("no business day found within the {direction} {iterations} days from {from}")]
    SearchExhausted {
        from: NaiveDate,
        direction: SearchDirection,
        iterations: u32
    }
}
