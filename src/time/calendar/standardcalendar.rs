use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::calendar::calendar::Calendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::dayofweekholiday::DayOfWeekHoliday;
use crate::time::holiday::holiday::Holiday;
use crate::time::holidays::americanholidays::AmericanHolidays;
use crate::time::holidays::nationalholidays::NationalHolidays;
use crate::time::holidays::unitedkingdomholidays::UnitedKingdomHolidays;
use crate::time::holidays::westernchristianholidays::WesternChristianHolidays;
use crate::time::holidays::worldeventholidays::WorldEventHolidays;

/// Ready-made calendars. Each is built on first use and shared for the rest
/// of the process. Saturday and Sunday are holidays in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardCalendar {
    BelgianNationalHolidays,
    FrenchNationalHolidays,
    GermanOfficialHolidays,
    LuxembourgerNationalHolidays,
    Target2ClosingDays,
    UnitedKingdomBankHolidays,
    UsFederalHolidays
}

const CALENDAR_COUNT: usize = 7;

static CALENDARS: [OnceLock<Calendar>; CALENDAR_COUNT] = [const { OnceLock::new() }; CALENDAR_COUNT];

impl StandardCalendar {
    pub const ALL: [StandardCalendar; CALENDAR_COUNT] = [
        StandardCalendar::BelgianNationalHolidays,
        StandardCalendar::FrenchNationalHolidays,
        StandardCalendar::GermanOfficialHolidays,
        StandardCalendar::LuxembourgerNationalHolidays,
        StandardCalendar::Target2ClosingDays,
        StandardCalendar::UnitedKingdomBankHolidays,
        StandardCalendar::UsFederalHolidays
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StandardCalendar::BelgianNationalHolidays => "Belgian national holidays",
            StandardCalendar::FrenchNationalHolidays => "French national holidays",
            StandardCalendar::GermanOfficialHolidays => "German official holidays",
            StandardCalendar::LuxembourgerNationalHolidays => "Luxembourger national holidays",
            StandardCalendar::Target2ClosingDays => "TARGET2 closing days",
            StandardCalendar::UnitedKingdomBankHolidays => "United Kingdom bank holidays",
            StandardCalendar::UsFederalHolidays => "US federal holidays"
        }
    }

    /// The shared calendar, built on the first call.
    pub fn calendar(&self) -> &'static Calendar {
        CALENDARS[*self as usize].get_or_init(|| Calendar::new(self.holidays()))
    }

    fn holidays(&self) -> Vec<Holiday> {
        let specific: Vec<Holiday> = match self {
            StandardCalendar::BelgianNationalHolidays => vec![
                WorldEventHolidays::NewYearDay.into(),
                WesternChristianHolidays::Easter.into(),
                WesternChristianHolidays::EasterMonday.into(),
                WorldEventHolidays::InternationalWorkersDay.into(),
                WesternChristianHolidays::AscensionDay.into(),
                WesternChristianHolidays::Pentecost.into(),
                WesternChristianHolidays::PentecostMonday.into(),
                NationalHolidays::BelgianNationalDay.into(),
                WesternChristianHolidays::AssumptionOfMary.into(),
                WesternChristianHolidays::AllSaintsDay.into(),
                WorldEventHolidays::ArmisticeDay.into(),
                WesternChristianHolidays::Christmas.into()
            ],
            StandardCalendar::FrenchNationalHolidays => vec![
                WorldEventHolidays::NewYearDay.into(),
                WesternChristianHolidays::EasterMonday.into(),
                WorldEventHolidays::InternationalWorkersDay.into(),
                WorldEventHolidays::VictoryInEuropeDay.into(),
                WesternChristianHolidays::AscensionDay.into(),
                WesternChristianHolidays::PentecostMonday.into(),
                NationalHolidays::BastilleDay.into(),
                WesternChristianHolidays::AssumptionOfMary.into(),
                WesternChristianHolidays::AllSaintsDay.into(),
                WorldEventHolidays::ArmisticeDay.into(),
                WesternChristianHolidays::Christmas.into()
            ],
            StandardCalendar::GermanOfficialHolidays => vec![
                WorldEventHolidays::NewYearDay.into(),
                WesternChristianHolidays::GoodFriday.into(),
                WesternChristianHolidays::EasterMonday.into(),
                WorldEventHolidays::InternationalWorkersDay.into(),
                WesternChristianHolidays::AscensionDay.into(),
                WesternChristianHolidays::PentecostMonday.into(),
                NationalHolidays::GermanUnityDay.into(),
                // 500th anniversary of the Reformation.
                Holiday::from(NationalHolidays::ReformationDay).in_years([2017]),
                WesternChristianHolidays::Christmas.into(),
                WesternChristianHolidays::SaintStephensDay.into()
            ],
            StandardCalendar::LuxembourgerNationalHolidays => vec![
                WorldEventHolidays::NewYearDay.into(),
                WesternChristianHolidays::EasterMonday.into(),
                WorldEventHolidays::InternationalWorkersDay.into(),
                NationalHolidays::LuxembourgEuropeDay.into(),
                WesternChristianHolidays::AscensionDay.into(),
                WesternChristianHolidays::PentecostMonday.into(),
                NationalHolidays::LuxembourgNationalDay.into(),
                WesternChristianHolidays::AssumptionOfMary.into(),
                WesternChristianHolidays::AllSaintsDay.into(),
                WesternChristianHolidays::Christmas.into(),
                WesternChristianHolidays::SaintStephensDay.into()
            ],
            StandardCalendar::Target2ClosingDays => vec![
                WorldEventHolidays::NewYearDay.into(),
                WesternChristianHolidays::GoodFriday.into(),
                WesternChristianHolidays::EasterMonday.into(),
                WorldEventHolidays::InternationalWorkersDay.into(),
                WesternChristianHolidays::Christmas.into(),
                WesternChristianHolidays::SaintStephensDay.into()
            ],
            StandardCalendar::UnitedKingdomBankHolidays => vec![
                UnitedKingdomHolidays::NewYearDay.into(),
                WesternChristianHolidays::GoodFriday.into(),
                UnitedKingdomHolidays::MayDay.into(),
                UnitedKingdomHolidays::SpringBankHoliday.into(),
                UnitedKingdomHolidays::Christmas.into(),
                UnitedKingdomHolidays::BoxingDay.into()
            ],
            StandardCalendar::UsFederalHolidays => vec![
                AmericanHolidays::NewYearDay.into(),
                AmericanHolidays::MartinLutherKingJrDay.into(),
                AmericanHolidays::PresidentsDay.into(),
                AmericanHolidays::MemorialDay.into(),
                AmericanHolidays::IndependenceDay.into(),
                AmericanHolidays::LaborDay.into(),
                AmericanHolidays::ColumbusDay.into(),
                AmericanHolidays::VeteransDay.into(),
                AmericanHolidays::Thanksgiving.into(),
                AmericanHolidays::Christmas.into()
            ]
        };

        let mut holidays: Vec<Holiday> = vec![
            DayOfWeekHoliday::SATURDAY.into(),
            DayOfWeekHoliday::SUNDAY.into()
        ];
        holidays.extend(specific);
        holidays
    }
}

impl fmt::Display for StandardCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl HolidayCalendar for StandardCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.calendar().is_holiday(d)
    }

    fn holidays_for(&self, d: NaiveDate) -> HashSet<Holiday> {
        self.calendar().holidays_for(d)
    }
}
