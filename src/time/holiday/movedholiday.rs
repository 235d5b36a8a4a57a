use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holiday::{Holiday, HolidayRule};

/// A holiday with some occurrences moved to another date, e.g. the 2020 UK
/// May Day moved from Monday 4 to Friday 8 May.
///
/// A date that was moved away never matches, even when it is also the
/// replacement of another moved occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MovedHolidayProp")]
pub struct MovedHoliday {
    base: Box<Holiday>,
    replacements: BTreeMap<NaiveDate, NaiveDate>,
    #[serde(skip_serializing)]
    inverted_replacements: BTreeMap<NaiveDate, NaiveDate>
}

#[derive(Deserialize)]
struct MovedHolidayProp {
    base: Holiday,
    replacements: BTreeMap<NaiveDate, NaiveDate>
}

impl From<MovedHolidayProp> for MovedHoliday {
    fn from(prop: MovedHolidayProp) -> Self {
        MovedHoliday::new(prop.base, prop.replacements)
    }
}

impl MovedHoliday {
    /// Builds the rule from `(original, replacement)` pairs. Pairs that do not
    /// move anything are dropped.
    pub fn new<I>(base: Holiday, replacements: I) -> MovedHoliday
    where
        I: IntoIterator<Item = (NaiveDate, NaiveDate)>
    {
        let mut replacement_map = BTreeMap::new();
        let mut inverted_replacements = BTreeMap::new();
        for (from, to) in replacements {
            if from != to {
                // The old replacement may since belong to another original.
                if let Some(previous_to) = replacement_map.insert(from, to) {
                    if inverted_replacements.get(&previous_to) == Some(&from) {
                        inverted_replacements.remove(&previous_to);
                    }
                }
                inverted_replacements.insert(to, from);
            }
        }

        MovedHoliday {
            base: Box::new(base),
            replacements: replacement_map,
            inverted_replacements
        }
    }

    pub fn base(&self) -> &Holiday {
        &self.base
    }

    pub fn replacements(&self) -> &BTreeMap<NaiveDate, NaiveDate> {
        &self.replacements
    }

    // Dates where `check` may disagree with the base: originals and
    // replacements. A base occurrence outside this set is always a match.
    fn overridden_count(&self) -> usize {
        self.replacements.len() + self.inverted_replacements.len()
    }

    fn first_base_match<F>(&self, from: NaiveDate, step: F) -> Option<NaiveDate>
    where
        F: Fn(&Holiday, NaiveDate) -> Option<NaiveDate>
    {
        let mut cursor = from;
        for _ in 0..=self.overridden_count() {
            let d = step(&self.base, cursor)?;
            if self.check(d) {
                return Some(d);
            }
            cursor = d;
        }
        None
    }
}

impl HolidayRule for MovedHoliday {
    fn check(&self, d: NaiveDate) -> bool {
        if self.replacements.contains_key(&d) {
            return false;
        }
        let original = self.inverted_replacements.get(&d).copied().unwrap_or(d);
        self.base.check(original)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        let from_base = self.first_base_match(from, |base, d| base.previous(d));
        let from_replacements = self.inverted_replacements
            .range(..from)
            .rev()
            .map(|(&to, _)| to)
            .find(|&to| self.check(to));
        match (from_base, from_replacements) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b)
        }
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        let from_base = self.first_base_match(from, |base, d| base.next(d));
        let from_replacements = self.inverted_replacements
            .range(from.succ_opt()?..)
            .map(|(&to, _)| to)
            .find(|&to| self.check(to));
        match (from_base, from_replacements) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::holiday::dayofweekinmonthholiday::DayOfWeekInMonthHoliday;
    use crate::time::holiday::monthdayholiday::MonthDayHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn uk_may_day() -> MovedHoliday {
        let first_monday_of_may = DayOfWeekInMonthHoliday::new(1, Weekday::Mon, 5).unwrap();
        MovedHoliday::new(first_monday_of_may.into(), [(date(2020, 5, 4), date(2020, 5, 8))])
    }

    #[test]
    fn moved_occurrence_matches_only_its_replacement() {
        let holiday = uk_may_day();
        assert!(!holiday.check(date(2020, 5, 4)));
        assert!(holiday.check(date(2020, 5, 8)));
        assert!(holiday.check(date(2019, 5, 6)));
        assert!(holiday.check(date(2021, 5, 3)));
    }

    #[test]
    fn identity_pairs_are_dropped() {
        let first_monday_of_may = DayOfWeekInMonthHoliday::new(1, Weekday::Mon, 5).unwrap();
        let holiday = MovedHoliday::new(first_monday_of_may.into(), [(date(2021, 5, 3), date(2021, 5, 3))]);
        assert!(holiday.replacements().is_empty());
        assert!(holiday.check(date(2021, 5, 3)));
    }

    #[test]
    fn moved_away_date_wins_over_being_a_replacement() {
        let first_monday_of_may = DayOfWeekInMonthHoliday::new(1, Weekday::Mon, 5).unwrap();
        // 05-04 moves to 05-08, and 05-01 is moved onto 05-04.
        let holiday = MovedHoliday::new(
            first_monday_of_may.into(),
            [(date(2020, 5, 4), date(2020, 5, 8)), (date(2020, 5, 1), date(2020, 5, 4))]
        );
        assert!(!holiday.check(date(2020, 5, 4)));
        assert!(holiday.check(date(2020, 5, 8)));
    }

    #[test]
    fn remapped_original_keeps_replacement_taken_over_by_another() {
        let labour_day: Holiday = MonthDayHoliday::new(5, 1).unwrap().into();
        // Both 2020-05-01 and 2021-05-01 go to 2020-05-08, then 2020-05-01 is
        // sent to 2020-05-09 instead.
        let holiday = MovedHoliday::new(
            labour_day,
            [
                (date(2020, 5, 1), date(2020, 5, 8)),
                (date(2021, 5, 1), date(2020, 5, 8)),
                (date(2020, 5, 1), date(2020, 5, 9))
            ]
        );
        assert!(holiday.check(date(2020, 5, 8)));
        assert!(holiday.check(date(2020, 5, 9)));
        assert!(!holiday.check(date(2020, 5, 1)));
        assert!(!holiday.check(date(2021, 5, 1)));
    }

    #[test]
    fn previous_and_next_see_replacements() {
        let holiday = uk_may_day();
        assert_eq!(holiday.next(date(2020, 1, 1)), Some(date(2020, 5, 8)));
        assert_eq!(holiday.next(date(2020, 5, 8)), Some(date(2021, 5, 3)));
        assert_eq!(holiday.previous(date(2021, 1, 1)), Some(date(2020, 5, 8)));
        assert_eq!(holiday.previous(date(2020, 5, 8)), Some(date(2019, 5, 6)));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(uk_may_day(), uk_may_day());
        let first_monday_of_may = DayOfWeekInMonthHoliday::new(1, Weekday::Mon, 5).unwrap();
        let unmoved = MovedHoliday::new(first_monday_of_may.into(), Vec::new());
        assert_ne!(uk_may_day(), unmoved);
    }
}
