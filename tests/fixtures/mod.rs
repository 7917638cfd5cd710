// Test fixtures - reusable test data
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Oct 1, 2023: the first cell of the October grid
    pub fn oct_1_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()
    }

    /// Wednesday, Oct 4, 2023
    pub fn oct_4_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 4).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample attendance records
pub mod attendance {
    /// The first half of October 2023 as shown on the attendance page.
    ///
    /// Note the explicit `weekend` on Wednesday/Thursday and `present` on
    /// Sunday the 1st: explicit entries are honoured as given.
    pub fn october_2023() -> Vec<(&'static str, &'static str)> {
        vec![
            ("2023-10-01", "present"),
            ("2023-10-02", "present"),
            ("2023-10-03", "present"),
            ("2023-10-04", "weekend"),
            ("2023-10-05", "weekend"),
            ("2023-10-06", "present"),
            ("2023-10-07", "present"),
            ("2023-10-08", "absent"),
            ("2023-10-09", "present"),
            ("2023-10-10", "present"),
            ("2023-10-11", "weekend"),
            ("2023-10-12", "weekend"),
            ("2023-10-13", "leave"),
            ("2023-10-14", "leave"),
            ("2023-10-15", "present"),
        ]
    }

    pub fn october_2023_json() -> String {
        let entries: serde_json::Map<String, serde_json::Value> = october_2023()
            .into_iter()
            .map(|(date, status)| (date.to_string(), serde_json::Value::from(status)))
            .collect();
        serde_json::Value::Object(entries).to_string()
    }
}
