use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::holiday::{Holiday, HolidayRule};

/// A holiday observed only in an explicit set of years, e.g. a one-off
/// jubilee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PunctualHoliday {
    base: Box<Holiday>,
    years_of_validity: BTreeSet<i32>
}

impl PunctualHoliday {
    pub fn new(base: Holiday, years_of_validity: BTreeSet<i32>) -> PunctualHoliday {
        PunctualHoliday { base: Box::new(base), years_of_validity }
    }

    pub fn base(&self) -> &Holiday {
        &self.base
    }

    pub fn years_of_validity(&self) -> &BTreeSet<i32> {
        &self.years_of_validity
    }
}

impl HolidayRule for PunctualHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        if !self.years_of_validity.contains(&d.year()) {
            return false;
        }
        self.base.check(d)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        for &year in self.years_of_validity.range(..=from.year()).rev() {
            let cursor = match NaiveDate::from_ymd_opt(year + 1, 1, 1) {
                Some(after_year) if after_year < from => after_year,
                _ => from
            };
            if let Some(d) = self.base.previous(cursor) {
                if d.year() == year {
                    return Some(d);
                }
            }
        }
        None
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        for &year in self.years_of_validity.range(from.year()..) {
            let cursor = match NaiveDate::from_ymd_opt(year - 1, 12, 31) {
                Some(before_year) if before_year > from => before_year,
                _ => from
            };
            if let Some(d) = self.base.next(cursor) {
                if d.year() == year {
                    return Some(d);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::holiday::monthdayholiday::MonthDayHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jubilee() -> PunctualHoliday {
        PunctualHoliday::new(MonthDayHoliday::new(6, 3).unwrap().into(), [2002, 2012, 2022].into_iter().collect())
    }

    #[test]
    fn check_only_in_listed_years() {
        let holiday = jubilee();
        assert!(holiday.check(date(2002, 6, 3)));
        assert!(holiday.check(date(2022, 6, 3)));
        assert!(!holiday.check(date(2021, 6, 3)));
        assert!(!holiday.check(date(2022, 6, 2)));
    }

    #[test]
    fn next_jumps_between_listed_years() {
        let holiday = jubilee();
        assert_eq!(holiday.next(date(1990, 1, 1)), Some(date(2002, 6, 3)));
        assert_eq!(holiday.next(date(2002, 6, 3)), Some(date(2012, 6, 3)));
        assert_eq!(holiday.next(date(2012, 6, 2)), Some(date(2012, 6, 3)));
        assert_eq!(holiday.next(date(2022, 6, 3)), None);
    }

    #[test]
    fn previous_jumps_between_listed_years() {
        let holiday = jubilee();
        assert_eq!(holiday.previous(date(2050, 1, 1)), Some(date(2022, 6, 3)));
        assert_eq!(holiday.previous(date(2022, 6, 3)), Some(date(2012, 6, 3)));
        assert_eq!(holiday.previous(date(2012, 6, 4)), Some(date(2012, 6, 3)));
        assert_eq!(holiday.previous(date(2002, 6, 3)), None);
    }

    #[test]
    fn empty_year_set_never_matches() {
        let holiday = PunctualHoliday::new(MonthDayHoliday::new(6, 3).unwrap().into(), BTreeSet::new());
        assert!(!holiday.check(date(2022, 6, 3)));
        assert_eq!(holiday.next(date(2022, 1, 1)), None);
    }
}
