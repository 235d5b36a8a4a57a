use chrono::{
    Days,
    NaiveDate
};

use crate::time::calendar::calendarerror::CalendarError;

/// An inclusive range of dates, `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeOfDates {
    from: NaiveDate,
    to: NaiveDate
}

impl RangeOfDates {
    /// Fails when `from` is after `to`. A single-day range is valid.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<RangeOfDates, CalendarError> {
        if from > to {
            return Err(CalendarError::InvalidRange { from, to });
        }
        Ok(RangeOfDates { from, to })
    }

    pub fn len(&self) -> usize {
        ((self.to - self.from).num_days() + 1) as usize
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0
        }
    }
}

impl<'a> IntoIterator for &'a RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.from.checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
