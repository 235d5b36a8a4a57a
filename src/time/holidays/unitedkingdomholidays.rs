use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::holiday::dayofweekinmonthholiday::DayOfWeekInMonthHoliday;
use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::shiftingstrategy::ShiftingStrategy;
use crate::time::holidays::westernchristianholidays::WesternChristianHolidays;
use crate::time::holidays::worldeventholidays::WorldEventHolidays;

/// United Kingdom bank holidays. Christmas, Boxing Day and New Year's Day
/// falling on a weekend are observed in the following week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitedKingdomHolidays {
    BoxingDay,
    Christmas,
    MayDay,
    NewYearDay,
    SpringBankHoliday
}

const EARLY_MAY_MONDAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(1, Weekday::Mon, 5);
const LAST_MAY_MONDAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(-1, Weekday::Mon, 5);

// 2020 May Day moved to the 75th anniversary of VE Day.
const MAY_DAY_MOVES: [((i32, u32, u32), (i32, u32, u32)); 1] = [((2020, 5, 4), (2020, 5, 8))];

impl UnitedKingdomHolidays {
    pub const ALL: [UnitedKingdomHolidays; 5] = [
        UnitedKingdomHolidays::BoxingDay,
        UnitedKingdomHolidays::Christmas,
        UnitedKingdomHolidays::MayDay,
        UnitedKingdomHolidays::NewYearDay,
        UnitedKingdomHolidays::SpringBankHoliday
    ];

    pub fn holiday(&self) -> Holiday {
        let observed = |base: Holiday| base.shifted(ShiftingStrategy::FollowingWeek);
        match self {
            UnitedKingdomHolidays::BoxingDay => observed(WesternChristianHolidays::BoxingDay.into()),
            UnitedKingdomHolidays::Christmas => observed(WesternChristianHolidays::Christmas.into()),
            UnitedKingdomHolidays::NewYearDay => observed(WorldEventHolidays::NewYearDay.into()),
            UnitedKingdomHolidays::MayDay => Holiday::from(EARLY_MAY_MONDAY).moved(
                MAY_DAY_MOVES.iter().filter_map(|&((y1, m1, d1), (y2, m2, d2))| {
                    Some((NaiveDate::from_ymd_opt(y1, m1, d1)?, NaiveDate::from_ymd_opt(y2, m2, d2)?))
                })
            ),
            UnitedKingdomHolidays::SpringBankHoliday => LAST_MAY_MONDAY.into()
        }
    }
}

impl From<UnitedKingdomHolidays> for Holiday {
    fn from(holiday: UnitedKingdomHolidays) -> Holiday {
        holiday.holiday()
    }
}
