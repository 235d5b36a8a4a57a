use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::time::holiday::dayofweekinmonthholiday::DayOfWeekInMonthHoliday;
use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::monthdayholiday::MonthDayHoliday;
use crate::time::holidays::worldeventholidays::WorldEventHolidays;

/// Holidays specific to one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NationalHolidays {
    AustraliaDay,
    BelgianNationalDay,
    BastilleDay,
    GermanUnityDay,
    ReformationDay,
    IrishMayDay,
    IrishJuneHoliday,
    IrishAugustHoliday,
    IrishOctoberHoliday,
    ItalianLiberationDay,
    ItalianRepublicDay,
    LuxembourgNationalDay,
    /// Europe Day, a public holiday in Luxembourg since 2019.
    LuxembourgEuropeDay,
    SpanishConstitutionDay,
    HispanicDay
}

const AUSTRALIA_DAY: MonthDayHoliday = MonthDayHoliday::of(1, 26);
const BELGIAN_NATIONAL_DAY: MonthDayHoliday = MonthDayHoliday::of(7, 21);
const BASTILLE_DAY: MonthDayHoliday = MonthDayHoliday::of(7, 14);
const GERMAN_UNITY_DAY: MonthDayHoliday = MonthDayHoliday::of(10, 3);
const REFORMATION_DAY: MonthDayHoliday = MonthDayHoliday::of(10, 31);
const IRISH_MAY_DAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(1, Weekday::Mon, 5);
const IRISH_JUNE_HOLIDAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(1, Weekday::Mon, 6);
const IRISH_AUGUST_HOLIDAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(1, Weekday::Mon, 8);
const IRISH_OCTOBER_HOLIDAY: DayOfWeekInMonthHoliday = DayOfWeekInMonthHoliday::of(-1, Weekday::Mon, 10);
const ITALIAN_LIBERATION_DAY: MonthDayHoliday = MonthDayHoliday::of(4, 25);
const ITALIAN_REPUBLIC_DAY: MonthDayHoliday = MonthDayHoliday::of(6, 2);
const LUXEMBOURG_NATIONAL_DAY: MonthDayHoliday = MonthDayHoliday::of(6, 23);
const SPANISH_CONSTITUTION_DAY: MonthDayHoliday = MonthDayHoliday::of(12, 6);

const LUXEMBOURG_EUROPE_DAY_SINCE: i32 = 2019;

impl NationalHolidays {
    pub const ALL: [NationalHolidays; 15] = [
        NationalHolidays::AustraliaDay,
        NationalHolidays::BelgianNationalDay,
        NationalHolidays::BastilleDay,
        NationalHolidays::GermanUnityDay,
        NationalHolidays::ReformationDay,
        NationalHolidays::IrishMayDay,
        NationalHolidays::IrishJuneHoliday,
        NationalHolidays::IrishAugustHoliday,
        NationalHolidays::IrishOctoberHoliday,
        NationalHolidays::ItalianLiberationDay,
        NationalHolidays::ItalianRepublicDay,
        NationalHolidays::LuxembourgNationalDay,
        NationalHolidays::LuxembourgEuropeDay,
        NationalHolidays::SpanishConstitutionDay,
        NationalHolidays::HispanicDay
    ];

    pub fn holiday(&self) -> Holiday {
        match self {
            NationalHolidays::AustraliaDay => AUSTRALIA_DAY.into(),
            NationalHolidays::BelgianNationalDay => BELGIAN_NATIONAL_DAY.into(),
            NationalHolidays::BastilleDay => BASTILLE_DAY.into(),
            NationalHolidays::GermanUnityDay => GERMAN_UNITY_DAY.into(),
            NationalHolidays::ReformationDay => REFORMATION_DAY.into(),
            NationalHolidays::IrishMayDay => IRISH_MAY_DAY.into(),
            NationalHolidays::IrishJuneHoliday => IRISH_JUNE_HOLIDAY.into(),
            NationalHolidays::IrishAugustHoliday => IRISH_AUGUST_HOLIDAY.into(),
            NationalHolidays::IrishOctoberHoliday => IRISH_OCTOBER_HOLIDAY.into(),
            NationalHolidays::ItalianLiberationDay => ITALIAN_LIBERATION_DAY.into(),
            NationalHolidays::ItalianRepublicDay => ITALIAN_REPUBLIC_DAY.into(),
            NationalHolidays::LuxembourgNationalDay => LUXEMBOURG_NATIONAL_DAY.into(),
            NationalHolidays::LuxembourgEuropeDay => {
                Holiday::from(WorldEventHolidays::EuropeDay).since_year(LUXEMBOURG_EUROPE_DAY_SINCE)
            }
            NationalHolidays::SpanishConstitutionDay => SPANISH_CONSTITUTION_DAY.into(),
            NationalHolidays::HispanicDay => WorldEventHolidays::ColumbusDay.into()
        }
    }
}

impl From<NationalHolidays> for Holiday {
    fn from(holiday: NationalHolidays) -> Holiday {
        holiday.holiday()
    }
}
