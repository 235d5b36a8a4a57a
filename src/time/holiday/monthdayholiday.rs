use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::utility::days_of_month;
use super::holiday::HolidayRule;
use super::holidayerror::{ensure_month, HolidayError};

// A February 29 holiday only exists in leap years, which are at most eight
// years apart.
const MAX_YEARS_TO_NEXT_OCCURRENCE: i32 = 8;

/// A holiday falling on the same month and day every year, e.g. `--12-25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthDayHolidayProp")]
pub struct MonthDayHoliday {
    month: u32,
    day: u32
}

#[derive(Deserialize)]
struct MonthDayHolidayProp {
    month: u32,
    day: u32
}

impl TryFrom<MonthDayHolidayProp> for MonthDayHoliday {
    type Error = HolidayError;

    fn try_from(prop: MonthDayHolidayProp) -> Result<Self, Self::Error> {
        MonthDayHoliday::new(prop.month, prop.day)
    }
}

impl MonthDayHoliday {
    pub fn new(month: u32, day: u32) -> Result<MonthDayHoliday, HolidayError> {
        ensure_month(month)?;
        // 2000 is a leap year, so February 29 is accepted.
        if day == 0 || day > days_of_month(2000, month) {
            return Err(HolidayError::InvalidDayOfMonth { month, day });
        }
        Ok(MonthDayHoliday { month, day })
    }

    /// Constructor for literal dates in const items, where an invalid month
    /// or day fails const evaluation.
    pub(crate) const fn of(month: u32, day: u32) -> MonthDayHoliday {
        assert!(month >= 1 && month <= 12, "month out of range");
        assert!(day >= 1 && day <= days_of_month(2000, month), "day out of range");
        MonthDayHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    fn at_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl FromStr for MonthDayHoliday {
    type Err = HolidayError;

    /// Parses the ISO-8601 month-day form `--MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || HolidayError::MonthDayParse(s.to_owned());
        let body = s.strip_prefix("--").ok_or_else(parse_error)?;
        let (month_str, day_str) = body.split_once('-').ok_or_else(parse_error)?;
        if month_str.len() != 2 || day_str.len() != 2 {
            return Err(parse_error());
        }
        let month = month_str.parse::<u32>().map_err(|_| parse_error())?;
        let day = day_str.parse::<u32>().map_err(|_| parse_error())?;
        MonthDayHoliday::new(month, day)
    }
}

impl HolidayRule for MonthDayHoliday {
    #[inline]
    fn check(&self, d: NaiveDate) -> bool {
        d.month() == self.month && d.day() == self.day
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        let start_year = if (from.month(), from.day()) > (self.month, self.day) {
            from.year()
        } else {
            from.year() - 1
        };
        (0..=MAX_YEARS_TO_NEXT_OCCURRENCE).find_map(|i| self.at_year(start_year - i))
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        let start_year = if (from.month(), from.day()) < (self.month, self.day) {
            from.year()
        } else {
            from.year() + 1
        };
        (0..=MAX_YEARS_TO_NEXT_OCCURRENCE).find_map(|i| self.at_year(start_year + i))
    }
}
