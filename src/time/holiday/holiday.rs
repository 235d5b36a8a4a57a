use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dayofweekholiday::DayOfWeekHoliday;
use super::dayofweekinmonthholiday::DayOfWeekInMonthHoliday;
use super::holidayerror::HolidayError;
use super::monthdayholiday::MonthDayHoliday;
use super::movedholiday::MovedHoliday;
use super::punctualholiday::PunctualHoliday;
use super::relativeholiday::RelativeHoliday;
use super::shiftedholiday::ShiftedHoliday;
use super::shiftingstrategy::ShiftingStrategy;
use super::westerneasterholiday::WesternEasterHoliday;
use super::yearrangeholiday::YearRangeHoliday;

/// A rule deciding whether a single calendar date is a holiday.
///
/// Rules are immutable values. `previous` and `next` are strict: the
/// returned date is always before (resp. after) `from`, and `None` means the
/// rule has no such occurrence within its search horizon or does not
/// enumerate occurrences at all.
pub trait HolidayRule {
    fn check(&self, d: NaiveDate) -> bool;

    fn previous(&self, _from: NaiveDate) -> Option<NaiveDate> {
        None
    }

    fn next(&self, _from: NaiveDate) -> Option<NaiveDate> {
        None
    }
}

/// Every rule variant behind one value type, so that rules compare and hash
/// structurally and a calendar can deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holiday {
    MonthDay(MonthDayHoliday),
    DayOfWeek(DayOfWeekHoliday),
    DayOfWeekInMonth(DayOfWeekInMonthHoliday),
    WesternEaster(WesternEasterHoliday),
    Relative(RelativeHoliday),
    YearRange(YearRangeHoliday),
    Punctual(PunctualHoliday),
    Moved(MovedHoliday),
    Shifted(ShiftedHoliday)
}

impl Holiday {
    fn as_rule(&self) -> &dyn HolidayRule {
        match self {
            Holiday::MonthDay(h) => h,
            Holiday::DayOfWeek(h) => h,
            Holiday::DayOfWeekInMonth(h) => h,
            Holiday::WesternEaster(h) => h,
            Holiday::Relative(h) => h,
            Holiday::YearRange(h) => h,
            Holiday::Punctual(h) => h,
            Holiday::Moved(h) => h,
            Holiday::Shifted(h) => h
        }
    }

    /// The same holiday, `days` days later (earlier when negative).
    pub fn relative(self, days: i32) -> Holiday {
        RelativeHoliday::new(self, days).into()
    }

    /// The holiday as observed on a weekday under `strategy`.
    pub fn shifted(self, strategy: ShiftingStrategy) -> Holiday {
        ShiftedHoliday::new(self, strategy).into()
    }

    /// Restricts the holiday to the inclusive range `start..=end` of years.
    pub fn within_years(self, start: i32, end: i32) -> Result<Holiday, HolidayError> {
        Ok(YearRangeHoliday::new(self, start, end)?.into())
    }

    /// Restricts the holiday to `start` and every later year.
    pub fn since_year(self, start: i32) -> Holiday {
        YearRangeHoliday::since(self, start).into()
    }

    /// Restricts the holiday to an explicit set of years.
    pub fn in_years<I>(self, years: I) -> Holiday
    where
        I: IntoIterator<Item = i32>
    {
        PunctualHoliday::new(self, years.into_iter().collect::<BTreeSet<i32>>()).into()
    }

    /// Moves individual occurrences, given as `(original, replacement)` pairs.
    pub fn moved<I>(self, replacements: I) -> Holiday
    where
        I: IntoIterator<Item = (NaiveDate, NaiveDate)>
    {
        MovedHoliday::new(self, replacements).into()
    }
}

impl HolidayRule for Holiday {
    #[inline]
    fn check(&self, d: NaiveDate) -> bool {
        self.as_rule().check(d)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.as_rule().previous(from)
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.as_rule().next(from)
    }
}

macro_rules! impl_from_rule {
    ($($variant:ident => $rule:ty),* $(,)?) => {
        $(
            impl From<$rule> for Holiday {
                fn from(rule: $rule) -> Holiday {
                    Holiday::$variant(rule)
                }
            }
        )*
    };
}

impl_from_rule! {
    MonthDay => MonthDayHoliday,
    DayOfWeek => DayOfWeekHoliday,
    DayOfWeekInMonth => DayOfWeekInMonthHoliday,
    WesternEaster => WesternEasterHoliday,
    Relative => RelativeHoliday,
    YearRange => YearRangeHoliday,
    Punctual => PunctualHoliday,
    Moved => MovedHoliday,
    Shifted => ShiftedHoliday
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn composites_compare_structurally() {
        let a = Holiday::from(MonthDayHoliday::new(7, 4).unwrap()).shifted(ShiftingStrategy::ClosestWeekday);
        let b = Holiday::from(MonthDayHoliday::new(7, 4).unwrap()).shifted(ShiftingStrategy::ClosestWeekday);
        let c = Holiday::from(MonthDayHoliday::new(7, 5).unwrap()).shifted(ShiftingStrategy::ClosestWeekday);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Holiday> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn fluent_helpers_build_the_expected_variants() {
        let easter = Holiday::from(WesternEasterHoliday);
        assert!(matches!(easter.clone().relative(1), Holiday::Relative(_)));
        assert!(matches!(easter.clone().since_year(2000), Holiday::YearRange(_)));
        assert!(matches!(easter.clone().in_years([2017]), Holiday::Punctual(_)));
        assert!(matches!(easter.clone().moved([(date(2020, 4, 12), date(2020, 4, 19))]), Holiday::Moved(_)));
        assert_eq!(
            easter.within_years(2021, 2020),
            Err(HolidayError::InvalidYearRange { start: 2021, end: 2020 })
        );
    }

    #[test]
    fn dispatch_reaches_the_wrapped_rule() {
        let saturday = Holiday::from(DayOfWeekHoliday::new(Weekday::Sat));
        assert!(saturday.check(date(2020, 4, 4)));
        assert_eq!(saturday.next(date(2020, 4, 4)), Some(date(2020, 4, 11)));
        assert_eq!(saturday.previous(date(2020, 4, 4)), Some(date(2020, 3, 28)));
    }
}
