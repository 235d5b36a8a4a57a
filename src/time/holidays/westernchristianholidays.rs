use serde::{Deserialize, Serialize};

use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::monthdayholiday::MonthDayHoliday;
use crate::time::holiday::westerneasterholiday::WESTERN_EASTER;

/// Feasts of the Western churches, fixed or relative to Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternChristianHolidays {
    AllSaintsDay,
    AscensionDay,
    AssumptionOfMary,
    BoxingDay,
    Christmas,
    Easter,
    EasterMonday,
    Epiphany,
    FeastOfTheImmaculateConception,
    GoodFriday,
    Pentecost,
    PentecostMonday,
    SaintPatricksDay,
    SaintStephensDay
}

const ALL_SAINTS_DAY: MonthDayHoliday = MonthDayHoliday::of(11, 1);
const ASSUMPTION_OF_MARY: MonthDayHoliday = MonthDayHoliday::of(8, 15);
const BOXING_DAY: MonthDayHoliday = MonthDayHoliday::of(12, 26);
const CHRISTMAS: MonthDayHoliday = MonthDayHoliday::of(12, 25);
const EPIPHANY: MonthDayHoliday = MonthDayHoliday::of(1, 6);
const IMMACULATE_CONCEPTION: MonthDayHoliday = MonthDayHoliday::of(12, 8);
const SAINT_PATRICKS_DAY: MonthDayHoliday = MonthDayHoliday::of(3, 17);
const SAINT_STEPHENS_DAY: MonthDayHoliday = MonthDayHoliday::of(12, 26);

impl WesternChristianHolidays {
    pub const ALL: [WesternChristianHolidays; 14] = [
        WesternChristianHolidays::AllSaintsDay,
        WesternChristianHolidays::AscensionDay,
        WesternChristianHolidays::AssumptionOfMary,
        WesternChristianHolidays::BoxingDay,
        WesternChristianHolidays::Christmas,
        WesternChristianHolidays::Easter,
        WesternChristianHolidays::EasterMonday,
        WesternChristianHolidays::Epiphany,
        WesternChristianHolidays::FeastOfTheImmaculateConception,
        WesternChristianHolidays::GoodFriday,
        WesternChristianHolidays::Pentecost,
        WesternChristianHolidays::PentecostMonday,
        WesternChristianHolidays::SaintPatricksDay,
        WesternChristianHolidays::SaintStephensDay
    ];

    /// Days after Easter Sunday for the movable feasts, `None` for the fixed
    /// ones.
    pub fn days_after_easter(&self) -> Option<i32> {
        match self {
            WesternChristianHolidays::AscensionDay => Some(39),
            WesternChristianHolidays::Easter => Some(0),
            WesternChristianHolidays::EasterMonday => Some(1),
            WesternChristianHolidays::GoodFriday => Some(-2),
            WesternChristianHolidays::Pentecost => Some(49),
            WesternChristianHolidays::PentecostMonday => Some(50),
            _ => None
        }
    }

    pub fn holiday(&self) -> Holiday {
        let easter_plus = |days: i32| Holiday::from(WESTERN_EASTER).relative(days);
        match self {
            WesternChristianHolidays::AllSaintsDay => ALL_SAINTS_DAY.into(),
            WesternChristianHolidays::AscensionDay => easter_plus(39),
            WesternChristianHolidays::AssumptionOfMary => ASSUMPTION_OF_MARY.into(),
            WesternChristianHolidays::BoxingDay => BOXING_DAY.into(),
            WesternChristianHolidays::Christmas => CHRISTMAS.into(),
            WesternChristianHolidays::Easter => WESTERN_EASTER.into(),
            WesternChristianHolidays::EasterMonday => easter_plus(1),
            WesternChristianHolidays::Epiphany => EPIPHANY.into(),
            WesternChristianHolidays::FeastOfTheImmaculateConception => IMMACULATE_CONCEPTION.into(),
            WesternChristianHolidays::GoodFriday => easter_plus(-2),
            WesternChristianHolidays::Pentecost => easter_plus(49),
            WesternChristianHolidays::PentecostMonday => easter_plus(50),
            WesternChristianHolidays::SaintPatricksDay => SAINT_PATRICKS_DAY.into(),
            WesternChristianHolidays::SaintStephensDay => SAINT_STEPHENS_DAY.into()
        }
    }
}

impl From<WesternChristianHolidays> for Holiday {
    fn from(holiday: WesternChristianHolidays) -> Holiday {
        holiday.holiday()
    }
}
