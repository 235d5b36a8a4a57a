use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::utility::days_of_month;
use super::holiday::HolidayRule;
use super::holidayerror::{ensure_month, HolidayError};

// Covers a full Gregorian cycle; a fifth weekday that never shows up within
// it never shows up at all.
const SEARCH_YEARS: i32 = 400;

/// The n-th given weekday of a month, counted from the start of the month
/// for a positive ordinal and from its end for a negative one.
///
/// `DayOfWeekInMonthHoliday::new(-1, Weekday::Mon, 5)` is the last Monday of
/// May. An ordinal of 5 only matches in years where the month has five such
/// weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DayOfWeekInMonthHolidayProp")]
pub struct DayOfWeekInMonthHoliday {
    ordinal: i8,
    weekday: Weekday,
    month: u32
}

#[derive(Deserialize)]
struct DayOfWeekInMonthHolidayProp {
    ordinal: i8,
    weekday: Weekday,
    month: u32
}

impl TryFrom<DayOfWeekInMonthHolidayProp> for DayOfWeekInMonthHoliday {
    type Error = HolidayError;

    fn try_from(prop: DayOfWeekInMonthHolidayProp) -> Result<Self, Self::Error> {
        DayOfWeekInMonthHoliday::new(prop.ordinal, prop.weekday, prop.month)
    }
}

impl DayOfWeekInMonthHoliday {
    pub fn new(ordinal: i8, weekday: Weekday, month: u32) -> Result<DayOfWeekInMonthHoliday, HolidayError> {
        if ordinal == 0 || !(-5..=5).contains(&ordinal) {
            return Err(HolidayError::InvalidOrdinal(ordinal));
        }
        ensure_month(month)?;
        Ok(DayOfWeekInMonthHoliday { ordinal, weekday, month })
    }

    pub(crate) const fn of(ordinal: i8, weekday: Weekday, month: u32) -> DayOfWeekInMonthHoliday {
        assert!(ordinal != 0 && ordinal >= -5 && ordinal <= 5, "ordinal out of range");
        assert!(month >= 1 && month <= 12, "month out of range");
        DayOfWeekInMonthHoliday { ordinal, weekday, month }
    }

    pub fn ordinal(&self) -> i8 {
        self.ordinal
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The matching date in `year`, if the month has that many such weekdays.
    pub fn occurrence(&self, year: i32) -> Option<NaiveDate> {
        if self.ordinal > 0 {
            return NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.ordinal as u8);
        }

        let eom = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;
        let days_back = (eom.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        let weeks_back = (-self.ordinal - 1) as u32;
        let d = eom.checked_sub_days(Days::new((days_back + 7 * weeks_back) as u64))?;
        if d.month() == self.month {
            Some(d)
        } else {
            None
        }
    }
}

impl HolidayRule for DayOfWeekInMonthHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        d.month() == self.month
            && d.weekday() == self.weekday
            && self.occurrence(d.year()) == Some(d)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        (0..SEARCH_YEARS)
            .filter_map(|i| self.occurrence(from.year() - i))
            .find(|d| *d < from)
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        (0..SEARCH_YEARS)
            .filter_map(|i| self.occurrence(from.year() + i))
            .find(|d| *d > from)
    }
}
