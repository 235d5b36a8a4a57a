use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::utility::shift_days;

/// How a holiday falling on a weekend is observed on a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftingStrategy {
    /// Saturday is observed on the Friday before, Sunday on the Monday after.
    ClosestWeekday,
    /// Saturday and Sunday are both observed two days later, on Monday and
    /// Tuesday.
    FollowingWeek
}

// Offsets in days, indexed by `Weekday::num_days_from_monday()`.
const CLOSEST_WEEKDAY_SHIFT: [i64; 7] = [0, 0, 0, 0, 0, -1, 1];
const CLOSEST_WEEKDAY_UNSHIFT: [i64; 7] = [-1, 0, 0, 0, 1, 0, 0];
const FOLLOWING_WEEK_SHIFT: [i64; 7] = [0, 0, 0, 0, 0, 2, 2];
const FOLLOWING_WEEK_UNSHIFT: [i64; 7] = [-2, -2, 0, 0, 0, 0, 0];

impl ShiftingStrategy {
    fn shift_table(&self) -> &'static [i64; 7] {
        match self {
            ShiftingStrategy::ClosestWeekday => &CLOSEST_WEEKDAY_SHIFT,
            ShiftingStrategy::FollowingWeek => &FOLLOWING_WEEK_SHIFT
        }
    }

    fn unshift_table(&self) -> &'static [i64; 7] {
        match self {
            ShiftingStrategy::ClosestWeekday => &CLOSEST_WEEKDAY_UNSHIFT,
            ShiftingStrategy::FollowingWeek => &FOLLOWING_WEEK_UNSHIFT
        }
    }

    /// Days a holiday falling on `weekday` is moved by.
    #[inline]
    pub fn shift_offset(&self, weekday: Weekday) -> i64 {
        self.shift_table()[weekday.num_days_from_monday() as usize]
    }

    /// Whether a holiday falling on `weekday` is observed on another day.
    #[inline]
    pub fn moves(&self, weekday: Weekday) -> bool {
        self.shift_offset(weekday) != 0
    }

    /// Whether `weekday` can be the observed day of a moved holiday.
    #[inline]
    pub fn is_shift_target(&self, weekday: Weekday) -> bool {
        self.unshift_table()[weekday.num_days_from_monday() as usize] != 0
    }

    /// The date a holiday falling on `d` is observed on.
    pub fn shift(&self, d: NaiveDate) -> Option<NaiveDate> {
        shift_days(d, self.shift_offset(d.weekday()))
    }

    /// The weekend date that would be observed on `d`, or `d` itself when
    /// `d` is not a shift target.
    pub fn unshift(&self, d: NaiveDate) -> Option<NaiveDate> {
        shift_days(d, self.unshift_table()[d.weekday().num_days_from_monday() as usize])
    }
}
