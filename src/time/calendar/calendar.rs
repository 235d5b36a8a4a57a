use std::collections::HashSet;

use chrono::NaiveDate;
use log::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::holiday::{Holiday, HolidayRule};

/// A calendar made of a deduplicated set of holiday rules. A date is a
/// holiday when any rule matches it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    holidays: HashSet<Holiday>
}

impl Calendar {
    /// Builds a calendar from any collection of rules. Structurally equal
    /// rules are kept once; an empty collection makes every day a business
    /// day.
    pub fn new<I>(holidays: I) -> Calendar
    where
        I: IntoIterator<Item = Holiday>
    {
        let mut given = 0usize;
        let holidays: HashSet<Holiday> = holidays
            .into_iter()
            .inspect(|_| given += 1)
            .collect();
        debug!("calendar built with {} rules ({} duplicates dropped)", holidays.len(), given - holidays.len());
        Calendar { holidays }
    }

    pub fn holidays(&self) -> &HashSet<Holiday> {
        &self.holidays
    }
}

impl FromIterator<Holiday> for Calendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Calendar::new(iter)
    }
}

impl HolidayCalendar for Calendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.check(d))
    }

    fn holidays_for(&self, d: NaiveDate) -> HashSet<Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.check(d))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::calendar::calendarerror::{CalendarError, SearchDirection};
    use crate::time::calendar::holidaycalendar::MAX_ITERATIONS;
    use crate::time::holiday::dayofweekholiday::DayOfWeekHoliday;
    use crate::time::holiday::monthdayholiday::MonthDayHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekend() -> Calendar {
        Calendar::new([
            DayOfWeekHoliday::SATURDAY.into(),
            DayOfWeekHoliday::SUNDAY.into()
        ])
    }

    #[test]
    fn duplicates_are_dropped() {
        let calendar = Calendar::new([
            DayOfWeekHoliday::SATURDAY.into(),
            DayOfWeekHoliday::SATURDAY.into(),
            MonthDayHoliday::new(12, 25).unwrap().into(),
            MonthDayHoliday::new(12, 25).unwrap().into()
        ]);
        assert_eq!(calendar.holidays().len(), 2);
    }

    #[test]
    fn empty_calendar_has_only_business_days() {
        let calendar = Calendar::default();
        let d = date(2020, 4, 4);
        assert!(calendar.is_business_day(d));
        assert_eq!(calendar.next_business_day(d), Ok(date(2020, 4, 5)));
        assert_eq!(calendar.previous_business_day(d), Ok(date(2020, 4, 3)));
        assert!(calendar.holidays_within(date(2020, 1, 1), date(2020, 12, 31)).unwrap().is_empty());
    }

    #[test]
    fn weekend_searches() {
        let calendar = weekend();
        let saturday = date(2020, 4, 4);
        assert!(calendar.is_holiday(saturday));
        assert_eq!(calendar.previous_business_day(saturday), Ok(date(2020, 4, 3)));
        assert_eq!(calendar.next_business_day(saturday), Ok(date(2020, 4, 6)));
        assert!(calendar.is_business_day(date(2020, 4, 3)));
    }

    #[test]
    fn holidays_for_lists_matching_rules() {
        let christmas: Holiday = MonthDayHoliday::new(12, 25).unwrap().into();
        let saturday: Holiday = DayOfWeekHoliday::SATURDAY.into();
        let calendar = Calendar::new([christmas.clone(), saturday.clone()]);

        // 2021-12-25 is a Saturday.
        let both = calendar.holidays_for(date(2021, 12, 25));
        assert_eq!(both, [christmas.clone(), saturday].into_iter().collect());
        assert_eq!(calendar.holidays_for(date(2020, 12, 25)), [christmas].into_iter().collect());
        assert!(calendar.holidays_for(date(2020, 12, 24)).is_empty());
    }

    #[test]
    fn every_day_a_holiday_exhausts_the_search() {
        let calendar: Calendar = [
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun
        ]
            .into_iter()
            .map(|w| DayOfWeekHoliday::new(w).into())
            .collect();

        let d = date(2020, 1, 1);
        assert!(calendar.is_holiday(d));
        assert_eq!(
            calendar.next_business_day(d),
            Err(CalendarError::SearchExhausted { from: d, direction: SearchDirection::Next, iterations: MAX_ITERATIONS })
        );
        assert_eq!(
            calendar.previous_business_day(d),
            Err(CalendarError::SearchExhausted { from: d, direction: SearchDirection::Previous, iterations: MAX_ITERATIONS })
        );
    }

    #[test]
    fn range_queries() {
        let calendar = weekend();
        let from = date(2020, 4, 1);
        let to = date(2020, 4, 7);
        assert_eq!(calendar.holidays_within(from, to), Ok(vec![date(2020, 4, 4), date(2020, 4, 5)]));
        assert_eq!(
            calendar.business_days_within(from, to),
            Ok(vec![date(2020, 4, 1), date(2020, 4, 2), date(2020, 4, 3), date(2020, 4, 6), date(2020, 4, 7)])
        );
        assert_eq!(calendar.holidays_within(from, from), Ok(vec![]));
        assert_eq!(calendar.holidays_within(date(2020, 4, 4), date(2020, 4, 4)), Ok(vec![date(2020, 4, 4)]));
        assert_eq!(
            calendar.business_days_within(to, from),
            Err(CalendarError::InvalidRange { from: to, to: from })
        );
    }

    #[test]
    fn shift_business_days_skips_holidays() {
        let calendar = weekend();
        let friday = date(2020, 4, 3);
        assert_eq!(calendar.shift_business_days(friday, 0), Ok(friday));
        assert_eq!(calendar.shift_business_days(friday, 1), Ok(date(2020, 4, 6)));
        assert_eq!(calendar.shift_business_days(friday, 5), Ok(date(2020, 4, 10)));
        assert_eq!(calendar.shift_business_days(date(2020, 4, 6), -1), Ok(friday));
        assert_eq!(calendar.shift_business_days(date(2020, 4, 5), -2), Ok(date(2020, 4, 2)));
    }
}
