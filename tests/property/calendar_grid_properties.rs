// Property-based tests for month grid derivation
// Exercises the grid builder across random months and status maps

use attendance_calendar::models::attendance::{AttendanceStatus, StatusMap};
use attendance_calendar::models::calendar::CalendarCell;
use attendance_calendar::services::calendar::CalendarGridBuilder;
use attendance_calendar::utils::date::{days_in_month, first_weekday, is_weekend};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = AttendanceStatus> {
    prop::sample::select(AttendanceStatus::ALL.to_vec())
}

proptest! {
    /// Property: grid length is leading blanks plus the days of the month
    #[test]
    fn prop_grid_length(year in 1600..2400i32, month in 0..12u32) {
        let cells = CalendarGridBuilder::build(year, month, &StatusMap::new()).unwrap();
        let blanks = first_weekday(year, month + 1).unwrap() as usize;
        let days = days_in_month(year, month + 1) as usize;

        prop_assert_eq!(cells.len(), blanks + days);
        prop_assert!(blanks < 7);
    }

    /// Property: blanks only lead, and days follow consecutively from the 1st
    #[test]
    fn prop_days_are_consecutive(year in 1600..2400i32, month in 0..12u32) {
        let cells = CalendarGridBuilder::build(year, month, &StatusMap::new()).unwrap();
        let first_day = cells.iter().position(|c| !c.is_empty()).unwrap();

        prop_assert!(cells[first_day..].iter().all(|c| !c.is_empty()));

        let dates: Vec<NaiveDate> = cells.iter().filter_map(CalendarCell::date).collect();
        prop_assert_eq!(dates[0].day(), 1);
        prop_assert_eq!(dates[0].month0(), month);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }

        // Day 1 sits under its weekday column
        prop_assert_eq!(first_day as u32, dates[0].weekday().num_days_from_sunday());
    }

    /// Property: without explicit entries, status follows the weekday
    #[test]
    fn prop_default_status_by_weekday(year in 1600..2400i32, month in 0..12u32) {
        let cells = CalendarGridBuilder::build(year, month, &StatusMap::new()).unwrap();
        for cell in cells.iter().filter(|c| !c.is_empty()) {
            let date = cell.date().unwrap();
            let expected = if is_weekend(date) {
                AttendanceStatus::Weekend
            } else {
                AttendanceStatus::Unmarked
            };
            prop_assert_eq!(cell.status(), Some(expected));
        }
    }

    /// Property: explicit statuses always win over the weekday default
    #[test]
    fn prop_explicit_status_wins(
        year in 1900..2100i32,
        month in 0..12u32,
        entries in prop::collection::vec((1..=28u32, status_strategy()), 0..20),
    ) {
        let statuses: StatusMap = entries
            .iter()
            .map(|(day, status)| (NaiveDate::from_ymd_opt(year, month + 1, *day).unwrap(), *status))
            .collect();

        let cells = CalendarGridBuilder::build(year, month, &statuses).unwrap();
        for (date, status) in &statuses {
            let cell = cells.iter().find(|c| c.date() == Some(*date)).unwrap();
            prop_assert_eq!(cell.status(), Some(*status));
        }
    }

    /// Property: month indices past December are always rejected
    #[test]
    fn prop_invalid_month_rejected(year in 1600..2400i32, month in 12..1000u32) {
        prop_assert!(CalendarGridBuilder::build(year, month, &StatusMap::new()).is_err());
    }
}
