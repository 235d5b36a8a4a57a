use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::utility::shift_days;
use super::holiday::{Holiday, HolidayRule};
use super::shiftingstrategy::ShiftingStrategy;

// No strategy moves a holiday by more than this many days.
const MAX_SHIFT: i64 = 2;

/// A holiday observed on a weekday when it falls on a weekend, e.g. US
/// Independence Day observed on Friday July 3 when July 4 is a Saturday.
///
/// The weekend date itself never matches: only the observed date does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftedHoliday {
    base: Box<Holiday>,
    strategy: ShiftingStrategy
}

impl ShiftedHoliday {
    pub fn new(base: Holiday, strategy: ShiftingStrategy) -> ShiftedHoliday {
        ShiftedHoliday { base: Box::new(base), strategy }
    }

    pub fn base(&self) -> &Holiday {
        &self.base
    }

    pub fn strategy(&self) -> ShiftingStrategy {
        self.strategy
    }
}

impl HolidayRule for ShiftedHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        let weekday = d.weekday();
        if self.strategy.moves(weekday) {
            return false;
        }
        if self.base.check(d) {
            return true;
        }
        self.strategy.is_shift_target(weekday)
            && self.strategy.unshift(d).is_some_and(|weekend| self.base.check(weekend))
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        // Observed dates are not ordered like base dates under every
        // strategy, so keep the latest one until base dates fall out of reach.
        let mut cursor = shift_days(from, MAX_SHIFT + 1)?;
        let mut best: Option<NaiveDate> = None;
        while let Some(occurrence) = self.base.previous(cursor) {
            if best.and_then(|b| shift_days(b, -MAX_SHIFT)).is_some_and(|limit| occurrence < limit) {
                break;
            }
            if let Some(observed) = self.strategy.shift(occurrence) {
                if observed < from && best.is_none_or(|b| observed > b) {
                    best = Some(observed);
                }
            }
            cursor = occurrence;
        }
        best
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut cursor = shift_days(from, -(MAX_SHIFT + 1))?;
        let mut best: Option<NaiveDate> = None;
        while let Some(occurrence) = self.base.next(cursor) {
            if best.and_then(|b| shift_days(b, MAX_SHIFT)).is_some_and(|limit| occurrence > limit) {
                break;
            }
            if let Some(observed) = self.strategy.shift(occurrence) {
                if observed > from && best.is_none_or(|b| observed < b) {
                    best = Some(observed);
                }
            }
            cursor = occurrence;
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::holiday::monthdayholiday::MonthDayHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month_day(month: u32, day: u32) -> Holiday {
        MonthDayHoliday::new(month, day).unwrap().into()
    }

    #[test]
    fn independence_day_observed_on_closest_weekday() {
        let base = month_day(7, 4);
        let observed = ShiftedHoliday::new(base.clone(), ShiftingStrategy::ClosestWeekday);

        assert!(observed.check(date(2020, 7, 3)));
        assert!(!observed.check(date(2020, 7, 4)));
        assert!(base.check(date(2020, 7, 4)));

        assert!(observed.check(date(2017, 7, 4)));
        assert!(observed.check(date(2026, 7, 3)));
        assert!(observed.check(date(2027, 7, 5)));
        assert!(!observed.check(date(2027, 7, 4)));
        assert!(!observed.check(date(2017, 7, 3)));
    }

    #[test]
    fn boxing_day_observed_in_the_following_week() {
        let observed = ShiftedHoliday::new(month_day(12, 26), ShiftingStrategy::FollowingWeek);
        // 2021-12-26 is a Sunday, 2022-12-26 a Monday.
        assert!(observed.check(date(2021, 12, 28)));
        assert!(!observed.check(date(2021, 12, 26)));
        assert!(!observed.check(date(2021, 12, 27)));
        assert!(observed.check(date(2022, 12, 26)));
        assert!(!observed.check(date(2022, 12, 28)));
    }

    #[test]
    fn next_returns_observed_dates() {
        let observed = ShiftedHoliday::new(month_day(7, 4), ShiftingStrategy::ClosestWeekday);
        assert_eq!(observed.next(date(2020, 1, 1)), Some(date(2020, 7, 3)));
        assert_eq!(observed.next(date(2020, 7, 2)), Some(date(2020, 7, 3)));
        assert_eq!(observed.next(date(2020, 7, 3)), Some(date(2021, 7, 5)));
    }

    #[test]
    fn previous_returns_observed_dates() {
        let observed = ShiftedHoliday::new(month_day(7, 4), ShiftingStrategy::ClosestWeekday);
        assert_eq!(observed.previous(date(2021, 7, 5)), Some(date(2020, 7, 3)));
        assert_eq!(observed.previous(date(2020, 7, 5)), Some(date(2020, 7, 3)));
        assert_eq!(observed.previous(date(2020, 7, 3)), Some(date(2019, 7, 4)));
    }

    #[test]
    fn observed_date_may_cross_a_year_boundary() {
        let new_year = ShiftedHoliday::new(month_day(1, 1), ShiftingStrategy::ClosestWeekday);
        // 2022-01-01 is a Saturday.
        assert!(new_year.check(date(2021, 12, 31)));
        assert_eq!(new_year.previous(date(2022, 1, 1)), Some(date(2021, 12, 31)));
        assert_eq!(new_year.next(date(2021, 12, 30)), Some(date(2021, 12, 31)));
        assert_eq!(new_year.next(date(2021, 12, 31)), Some(date(2023, 1, 2)));
    }
}
