//! Calendar-day descriptors with display metadata.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::constants::{MONTHS, WEEKDAYS};

/// A single day shown in the month grid.
///
/// `id` is the `YYYY-MM-DD` key of the day, so schedules keyed against it stay
/// addressable after the grid is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dated {
    pub id: String,
    pub date: u32,
    pub day_str: &'static str,
    pub date_ordinal: &'static str,
    pub month_str: &'static str,
    pub year: i32,
    #[serde(skip)]
    naive: NaiveDate,
}

impl Dated {
    pub fn from_date(date: NaiveDate) -> Self {
        let day = date.day();
        Dated {
            id: date_id(date),
            date: day,
            day_str: WEEKDAYS[date.weekday().num_days_from_sunday() as usize],
            date_ordinal: ordinal_suffix(day),
            month_str: MONTHS[date.month0() as usize],
            year: date.year(),
            naive: date,
        }
    }

    /// The absolute date this descriptor was built from.
    pub fn naive_date(&self) -> NaiveDate {
        self.naive
    }

    pub fn is_same_day(&self, date: NaiveDate) -> bool {
        self.naive == date
    }

    /// Heading used by the create dialog, e.g. "Friday, 10th 2024".
    pub fn title(&self) -> String {
        format!(
            "{}, {}{} {}",
            self.day_str, self.date, self.date_ordinal, self.year
        )
    }
}

/// Canonical key for a date.
pub fn date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// English ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_from_date() {
        let dated = Dated::from_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(dated.id, "2024-05-10");
        assert_eq!(dated.date, 10);
        assert_eq!(dated.day_str, "Friday");
        assert_eq!(dated.date_ordinal, "th");
        assert_eq!(dated.month_str, "May");
        assert_eq!(dated.year, 2024);
        assert_eq!(dated.title(), "Friday, 10th 2024");
    }

    #[test]
    fn test_id_is_zero_padded_and_stable() {
        let date = NaiveDate::from_ymd_opt(987, 1, 2).unwrap();
        assert_eq!(Dated::from_date(date).id, "0987-01-02");
        assert_eq!(Dated::from_date(date), Dated::from_date(date));
    }

    #[test]
    fn test_is_same_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let dated = Dated::from_date(date);
        assert!(dated.is_same_day(date));
        assert!(!dated.is_same_day(date.succ_opt().unwrap()));
    }
}
