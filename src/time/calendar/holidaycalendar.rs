use std::collections::HashSet;

use chrono::NaiveDate;
use log::{debug, trace, warn};

use crate::time::calendar::calendarerror::{CalendarError, SearchDirection};
use crate::time::holiday::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;

/// Upper bound on the days visited by one business-day search, about ten
/// years.
pub const MAX_ITERATIONS: u32 = 3650;

/// Holiday and business-day queries over a fixed set of rules.
///
/// Implementors only decide what a holiday is; the searches and range
/// queries are provided. Implementors must be immutable after construction.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Every rule matching `d`.
    fn holidays_for(&self, d: NaiveDate) -> HashSet<Holiday>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// The first business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        search_business_day(self, d, SearchDirection::Next)
    }

    /// The last business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        search_business_day(self, d, SearchDirection::Previous)
    }

    /// Moves `n` business days from `d`, backward when `n` is negative.
    /// `d` itself need not be a business day; `n == 0` returns `d`.
    fn shift_business_days(&self, d: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
        let direction = if n >= 0 {
            SearchDirection::Next
        } else {
            SearchDirection::Previous
        };

        let mut result = d;
        for _ in 0..n.unsigned_abs() {
            result = search_business_day(self, result, direction)?;
        }
        Ok(result)
    }

    /// Holidays in `from..=to`, ascending.
    fn holidays_within(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
        let range = RangeOfDates::new(from, to)?;
        let holidays: Vec<NaiveDate> = range.iter().filter(|&d| self.is_holiday(d)).collect();
        trace!("{} holidays in {} days from {} to {}", holidays.len(), range.len(), from, to);
        Ok(holidays)
    }

    /// Business days in `from..=to`, ascending.
    fn business_days_within(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
        let range = RangeOfDates::new(from, to)?;
        let business_days: Vec<NaiveDate> = range.iter().filter(|&d| self.is_business_day(d)).collect();
        trace!("{} business days in {} days from {} to {}", business_days.len(), range.len(), from, to);
        Ok(business_days)
    }
}

fn search_business_day<C>(calendar: &C, from: NaiveDate, direction: SearchDirection) -> Result<NaiveDate, CalendarError>
where
    C: HolidayCalendar + ?Sized
{
    let step: fn(&NaiveDate) -> Option<NaiveDate> = match direction {
        SearchDirection::Next => NaiveDate::succ_opt,
        SearchDirection::Previous => NaiveDate::pred_opt
    };

    let mut candidate = from;
    for i in 1..=MAX_ITERATIONS {
        candidate = match step(&candidate) {
            Some(d) => d,
            None => break
        };
        if calendar.is_business_day(candidate) {
            debug!("{} business day from {} is {} after {} steps", direction, from, candidate, i);
            return Ok(candidate);
        }
    }

    warn!("no {} business day from {} within {} days", direction, from, MAX_ITERATIONS);
    Err(CalendarError::SearchExhausted { from, direction, iterations: MAX_ITERATIONS })
}
