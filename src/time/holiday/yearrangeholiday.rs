use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::holiday::{Holiday, HolidayRule};
use super::holidayerror::HolidayError;

/// A holiday only observed in an inclusive range of years.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearRangeHolidayProp")]
pub struct YearRangeHoliday {
    base: Box<Holiday>,
    start_year: i32,
    end_year: i32
}

#[derive(Deserialize)]
struct YearRangeHolidayProp {
    base: Holiday,
    start_year: i32,
    end_year: i32
}

impl TryFrom<YearRangeHolidayProp> for YearRangeHoliday {
    type Error = HolidayError;

    fn try_from(prop: YearRangeHolidayProp) -> Result<Self, Self::Error> {
        YearRangeHoliday::new(prop.base, prop.start_year, prop.end_year)
    }
}

impl YearRangeHoliday {
    pub fn new(base: Holiday, start_year: i32, end_year: i32) -> Result<YearRangeHoliday, HolidayError> {
        if start_year > end_year {
            return Err(HolidayError::InvalidYearRange { start: start_year, end: end_year });
        }
        Ok(YearRangeHoliday { base: Box::new(base), start_year, end_year })
    }

    /// Valid from `start_year` on, without an end.
    pub fn since(base: Holiday, start_year: i32) -> YearRangeHoliday {
        YearRangeHoliday { base: Box::new(base), start_year, end_year: i32::MAX }
    }

    pub fn base(&self) -> &Holiday {
        &self.base
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    #[inline]
    pub fn is_valid_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

impl HolidayRule for YearRangeHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        if !self.is_valid_year(d.year()) {
            return false;
        }
        self.base.check(d)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        // Start at most just after the range so the first base hit is a candidate.
        let from = match NaiveDate::from_ymd_opt(self.end_year.saturating_add(1), 1, 1) {
            Some(after_range) if after_range < from => after_range,
            _ => from
        };
        self.base.previous(from).filter(|d| self.is_valid_year(d.year()))
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        let from = match NaiveDate::from_ymd_opt(self.start_year.saturating_sub(1), 12, 31) {
            Some(before_range) if before_range > from => before_range,
            _ => from
        };
        self.base.next(from).filter(|d| self.is_valid_year(d.year()))
    }
}
