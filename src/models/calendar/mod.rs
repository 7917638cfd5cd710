// Calendar module
// Grid cells and the month cursor driving the attendance calendar

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::models::attendance::AttendanceStatus;
use crate::utils::date;

/// Column headers for a Sunday-first week
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DAYS_IN_WEEK: usize = 7;

/// One slot of a month grid.
///
/// `Empty` cells only ever appear before the first `Day` of a grid, aligning
/// day 1 under its weekday column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    Empty,
    Day {
        date: NaiveDate,
        status: AttendanceStatus,
    },
}

impl CalendarCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Day { date, .. } => Some(*date),
            CalendarCell::Empty => None,
        }
    }

    pub fn status(&self) -> Option<AttendanceStatus> {
        match self {
            CalendarCell::Day { status, .. } => Some(*status),
            CalendarCell::Empty => None,
        }
    }
}

/// The month currently shown by a calendar view.
///
/// `month` is 0-based (0 = January) to match the grid builder's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` when `month` is outside 0..=11.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Month containing the local current date
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Parses `YYYY-MM` where the month is written 1-based.
    pub fn parse(text: &str) -> Option<Self> {
        let (year, month) = text.split_once('-')?;
        if month.len() != 2 {
            return None;
        }
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month.checked_sub(1)?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month index
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month before this one, or `None` past the first representable year.
    pub fn previous(&self) -> Option<Self> {
        if self.month == 0 {
            Some(Self {
                year: self.year.checked_sub(1)?,
                month: 11,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// Month after this one, or `None` past the last representable year.
    pub fn next(&self) -> Option<Self> {
        if self.month == 11 {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 0,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Heading such as "October 2023"
    pub fn title(&self) -> String {
        format!("{} {}", date::month_name(self.month + 1), self.year)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month0() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert!(MonthCursor::new(2023, 11).is_some());
        assert!(MonthCursor::new(2023, 12).is_none());
    }

    #[test]
    fn test_previous_wraps_to_december() {
        let cursor = MonthCursor::new(2024, 0).unwrap();
        assert_eq!(cursor.previous(), MonthCursor::new(2023, 11));
    }

    #[test]
    fn test_next_wraps_to_january() {
        let cursor = MonthCursor::new(2023, 11).unwrap();
        assert_eq!(cursor.next(), MonthCursor::new(2024, 0));
        assert_eq!(cursor.next().and_then(|c| c.previous()), Some(cursor));
    }

    #[test]
    fn test_navigation_stops_at_year_bounds() {
        assert_eq!(MonthCursor::new(i32::MAX, 11).unwrap().next(), None);
        assert_eq!(MonthCursor::new(i32::MIN, 0).unwrap().previous(), None);
        assert_eq!(
            MonthCursor::new(i32::MAX, 10).unwrap().next(),
            MonthCursor::new(i32::MAX, 11)
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthCursor::new(2023, 9).unwrap().title(), "October 2023");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            MonthCursor::parse("2023-10"),
            Some(MonthCursor::new(2023, 9).unwrap())
        );
        assert_eq!(MonthCursor::parse("2023-00"), None);
        assert_eq!(MonthCursor::parse("2023-13"), None);
        assert_eq!(MonthCursor::parse("2023-1"), None);
        assert_eq!(MonthCursor::parse("October"), None);
    }

    #[test]
    fn test_from_date_and_contains() {
        let day = NaiveDate::from_ymd_opt(2023, 10, 13).unwrap();
        let cursor = MonthCursor::from_date(day);
        assert_eq!(cursor.year(), 2023);
        assert_eq!(cursor.month(), 9);
        assert!(cursor.contains(day));
        assert!(!cursor.contains(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()));
    }

    #[test]
    fn test_cell_accessors() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap();
        let cell = CalendarCell::Day {
            date,
            status: AttendanceStatus::Present,
        };
        assert_eq!(cell.date(), Some(date));
        assert_eq!(cell.status(), Some(AttendanceStatus::Present));
        assert!(!cell.is_empty());
        assert!(CalendarCell::Empty.is_empty());
        assert_eq!(CalendarCell::Empty.date(), None);
    }

    #[test]
    fn test_cell_serializes_with_kind_tag() {
        let cell = CalendarCell::Day {
            date: NaiveDate::from_ymd_opt(2023, 10, 8).unwrap(),
            status: AttendanceStatus::Absent,
        };
        let json = serde_json::to_value(cell).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "day", "date": "2023-10-08", "status": "absent"})
        );
        assert_eq!(
            serde_json::to_value(CalendarCell::Empty).unwrap(),
            serde_json::json!({"kind": "empty"})
        );
    }
}
