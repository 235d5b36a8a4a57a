use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holiday::HolidayRule;

/// A weekly holiday, typically one of the days of a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayOfWeekHoliday {
    weekday: Weekday
}

impl DayOfWeekHoliday {
    pub const MONDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Mon);
    pub const TUESDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Tue);
    pub const WEDNESDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Wed);
    pub const THURSDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Thu);
    pub const FRIDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Fri);
    pub const SATURDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Sat);
    pub const SUNDAY: DayOfWeekHoliday = DayOfWeekHoliday::new(Weekday::Sun);

    pub const fn new(weekday: Weekday) -> DayOfWeekHoliday {
        DayOfWeekHoliday { weekday }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl HolidayRule for DayOfWeekHoliday {
    #[inline]
    fn check(&self, d: NaiveDate) -> bool {
        d.weekday() == self.weekday
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        let days_back = (from.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        // Same weekday, go back a full week
        let days_back = if days_back == 0 { 7 } else { days_back };
        from.checked_sub_days(Days::new(days_back as u64))
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        let days_ahead = (self.weekday.num_days_from_monday() + 7
                          - from.weekday().num_days_from_monday()) % 7;
        let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
        from.checked_add_days(Days::new(days_ahead as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn check_matches_weekday_only() {
        // 2020-04-04 is a Saturday
        assert!(DayOfWeekHoliday::SATURDAY.check(date(2020, 4, 4)));
        assert!(DayOfWeekHoliday::SATURDAY.check(date(2020, 4, 11)));
        assert!(!DayOfWeekHoliday::SATURDAY.check(date(2020, 4, 5)));
    }

    #[test]
    fn previous_and_next_skip_the_starting_day() {
        let wednesday = DayOfWeekHoliday::WEDNESDAY;
        // 2020-04-15 is a Wednesday
        assert_eq!(wednesday.next(date(2020, 4, 14)), Some(date(2020, 4, 15)));
        assert_eq!(wednesday.next(date(2020, 4, 15)), Some(date(2020, 4, 22)));
        assert_eq!(wednesday.next(date(2020, 4, 16)), Some(date(2020, 4, 22)));
        assert_eq!(wednesday.previous(date(2020, 4, 16)), Some(date(2020, 4, 15)));
        assert_eq!(wednesday.previous(date(2020, 4, 15)), Some(date(2020, 4, 8)));
        assert_eq!(wednesday.previous(date(2020, 4, 14)), Some(date(2020, 4, 8)));
    }
}
