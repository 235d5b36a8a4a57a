use serde::{Deserialize, Serialize};

use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::monthdayholiday::MonthDayHoliday;

/// Commemorations of historical events shared by several countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldEventHolidays {
    AnzacDay,
    ArmisticeDay,
    ColumbusDay,
    EuropeDay,
    InternationalWorkersDay,
    NewYearDay,
    VictoryInEuropeDay
}

const ANZAC_DAY: MonthDayHoliday = MonthDayHoliday::of(4, 25);
const ARMISTICE_DAY: MonthDayHoliday = MonthDayHoliday::of(11, 11);
const COLUMBUS_DAY: MonthDayHoliday = MonthDayHoliday::of(10, 12);
const EUROPE_DAY: MonthDayHoliday = MonthDayHoliday::of(5, 9);
const INTERNATIONAL_WORKERS_DAY: MonthDayHoliday = MonthDayHoliday::of(5, 1);
const NEW_YEAR_DAY: MonthDayHoliday = MonthDayHoliday::of(1, 1);
const VICTORY_IN_EUROPE_DAY: MonthDayHoliday = MonthDayHoliday::of(5, 8);

impl WorldEventHolidays {
    pub const ALL: [WorldEventHolidays; 7] = [
        WorldEventHolidays::AnzacDay,
        WorldEventHolidays::ArmisticeDay,
        WorldEventHolidays::ColumbusDay,
        WorldEventHolidays::EuropeDay,
        WorldEventHolidays::InternationalWorkersDay,
        WorldEventHolidays::NewYearDay,
        WorldEventHolidays::VictoryInEuropeDay
    ];

    pub fn month_day(&self) -> MonthDayHoliday {
        match self {
            WorldEventHolidays::AnzacDay => ANZAC_DAY,
            WorldEventHolidays::ArmisticeDay => ARMISTICE_DAY,
            WorldEventHolidays::ColumbusDay => COLUMBUS_DAY,
            WorldEventHolidays::EuropeDay => EUROPE_DAY,
            WorldEventHolidays::InternationalWorkersDay => INTERNATIONAL_WORKERS_DAY,
            WorldEventHolidays::NewYearDay => NEW_YEAR_DAY,
            WorldEventHolidays::VictoryInEuropeDay => VICTORY_IN_EUROPE_DAY
        }
    }

    pub fn holiday(&self) -> Holiday {
        self.month_day().into()
    }
}

impl From<WorldEventHolidays> for Holiday {
    fn from(holiday: WorldEventHolidays) -> Holiday {
        holiday.holiday()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::holiday::holiday::HolidayRule;

    #[test]
    fn fixed_dates() {
        let d = NaiveDate::from_ymd_opt(2021, 11, 11).unwrap();
        assert!(WorldEventHolidays::ArmisticeDay.holiday().check(d));
        assert!(!WorldEventHolidays::VictoryInEuropeDay.holiday().check(d));
        assert_eq!(WorldEventHolidays::EuropeDay.month_day().month(), 5);
        assert_eq!(WorldEventHolidays::EuropeDay.month_day().day(), 9);
    }
}
