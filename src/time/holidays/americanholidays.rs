use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::time::holiday::dayofweekinmonthholiday::DayOfWeekInMonthHoliday;
use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::monthdayholiday::MonthDayHoliday;
use crate::time::holiday::shiftingstrategy::ShiftingStrategy;
use crate::time::holidays::westernchristianholidays::WesternChristianHolidays;
use crate::time::holidays::worldeventholidays::WorldEventHolidays;

/// United States federal holidays. Fixed-date ones are observed on the
/// closest weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmericanHolidays {
    Christmas,
    ColumbusDay,
    IndependenceDay,
    LaborDay,
    MartinLutherKingJrDay,
    MemorialDay,
    NewYearDay,
    PresidentsDay,
    VeteransDay,
    Thanksgiving
}

const INDEPENDENCE_DAY: MonthDayHoliday = MonthDayHoliday::of(7, 4);
const COLUMBUS_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(2, Weekday::Mon, 10);
const LABOR_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(1, Weekday::Mon, 9);
const MARTIN_LUTHER_KING_JR_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(3, Weekday::Mon, 1);
const MEMORIAL_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(-1, Weekday::Mon, 5);
const PRESIDENTS_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(3, Weekday::Mon, 2);
const THANKSGIVING: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(4, Weekday::Thu, 11);

impl AmericanHolidays {
    pub const ALL: [AmericanHolidays; 10] = [
        AmericanHolidays::Christmas,
        AmericanHolidays::ColumbusDay,
        AmericanHolidays::IndependenceDay,
        AmericanHolidays::LaborDay,
        AmericanHolidays::MartinLutherKingJrDay,
        AmericanHolidays::MemorialDay,
        AmericanHolidays::NewYearDay,
        AmericanHolidays::PresidentsDay,
        AmericanHolidays::VeteransDay,
        AmericanHolidays::Thanksgiving
    ];

    pub fn holiday(&self) -> Holiday {
        let observed = |base: Holiday| base.shifted(ShiftingStrategy::ClosestWeekday);
        match self {
            AmericanHolidays::Christmas => observed(WesternChristianHolidays::Christmas.into()),
            AmericanHolidays::IndependenceDay => observed(INDEPENDENCE_DAY.into()),
            AmericanHolidays::NewYearDay => observed(WorldEventHolidays::NewYearDay.into()),
            AmericanHolidays::VeteransDay => observed(WorldEventHolidays::ArmisticeDay.into()),
            AmericanHolidays::ColumbusDay => COLUMBUS_DAY.into(),
            AmericanHolidays::LaborDay => LABOR_DAY.into(),
            AmericanHolidays::MartinLutherKingJrDay => MARTIN_LUTHER_KING_JR_DAY.into(),
            AmericanHolidays::MemorialDay => MEMORIAL_DAY.into(),
            AmericanHolidays::PresidentsDay => PRESIDENTS_DAY.into(),
            AmericanHolidays::Thanksgiving => THANKSGIVING.into()
        }
    }
}

impl From<AmericanHolidays> for Holiday {
    fn from(holiday: AmericanHolidays) -> Holiday {
        holiday.holiday()
    }
}
