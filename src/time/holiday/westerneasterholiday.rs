use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::holiday::HolidayRule;

/// Western (Gregorian) Easter Sunday of `year`, by the anonymous
/// Meeus/Jones/Butcher algorithm.
///
/// Returns `None` only when the year lies outside the range of `NaiveDate`.
pub fn western_easter(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month = n.div_euclid(31) as u32;
    let day = (n.rem_euclid(31) + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Easter Sunday. Stateless; `WESTERN_EASTER` is the shared instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WesternEasterHoliday;

pub const WESTERN_EASTER: WesternEasterHoliday = WesternEasterHoliday;

impl HolidayRule for WesternEasterHoliday {
    #[inline]
    fn check(&self, d: NaiveDate) -> bool {
        western_easter(d.year()) == Some(d)
    }

    fn previous(&self, from: NaiveDate) -> Option<NaiveDate> {
        match western_easter(from.year()) {
            Some(easter) if easter < from => Some(easter),
            _ => western_easter(from.year() - 1)
        }
    }

    fn next(&self, from: NaiveDate) -> Option<NaiveDate> {
        match western_easter(from.year()) {
            Some(easter) if easter > from => Some(easter),
            _ => western_easter(from.year() + 1)
        }
    }
}
