use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::utility::shift_days;
use super::holiday::{Holiday, HolidayRule};

/// A holiday a fixed number of days after (or before, when negative) another
/// one, e.g. Easter Monday is Easter plus one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeHoliday {
    base: Box<Holiday>,
    plus_days: i32
}

impl RelativeHoliday {
    pub fn new(base: Holiday, plus_days: i32) -> RelativeHoliday {
        RelativeHoliday { base: Box::new(base), plus_days }
    }

    pub fn base(&self) -> &Holiday {
        &self.base
    }

    pub fn plus_days(&self) -> i32 {
        self.plus_days
    }

    #[inline]
    fn unshift(&self, d: NaiveDate) -> Option<NaiveDate> {
        shift_days(d, -(self.plus_days as i64))
    }

    #[inline]
    fn shift(&self, d: NaiveDate) -> Option<NaiveDate> {
        shift_days(d, self.plus_days as i64)
    }
}

impl HolidayRule for RelativeHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        self.unshift(d).is_some_and(|base_date| self.base.check(base_date))
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.base.previous(self.unshift(from)?).and_then(|d| self.shift(d))
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.base.next(self.unshift(from)?).and_then(|d| self.shift(d))
    }
}
