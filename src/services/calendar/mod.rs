// Calendar grid service
// Derives the ordered cell sequence a month view renders

mod error;

pub use error::CalendarError;

use chrono::NaiveDate;
use std::iter;
use std::slice::Chunks;

use crate::models::attendance::{AttendanceStatus, StatusMap};
use crate::models::calendar::{CalendarCell, MonthCursor, DAYS_IN_WEEK};
use crate::utils::date;

pub struct CalendarGridBuilder;

impl CalendarGridBuilder {
    /// Build the grid for `month` (0-based) of `year`.
    ///
    /// The result starts with one `Empty` cell per weekday before the 1st
    /// (Sunday = 0) followed by every day of the month in order. Explicit
    /// entries in `statuses` always win; otherwise weekends default to
    /// `Weekend` and weekdays to `Unmarked`. Entries for other months are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use attendance_calendar::models::attendance::StatusMap;
    /// use attendance_calendar::services::calendar::CalendarGridBuilder;
    ///
    /// let cells = CalendarGridBuilder::build(2024, 1, &StatusMap::new()).unwrap();
    /// assert_eq!(cells.iter().filter(|c| !c.is_empty()).count(), 29);
    /// ```
    pub fn build(
        year: i32,
        month: u32,
        statuses: &StatusMap,
    ) -> Result<Vec<CalendarCell>, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        let month1 = month + 1;

        let leading_blanks =
            date::first_weekday(year, month1).ok_or(CalendarError::InvalidYear(year))? as usize;
        let days = date::days_in_month(year, month1);

        let mut cells = Vec::with_capacity(leading_blanks + days as usize);
        cells.extend(iter::repeat(CalendarCell::Empty).take(leading_blanks));

        for day in 1..=days {
            let date = NaiveDate::from_ymd_opt(year, month1, day)
                .ok_or(CalendarError::InvalidYear(year))?;
            cells.push(CalendarCell::Day {
                date,
                status: Self::status_for(date, statuses),
            });
        }

        log::debug!(
            "Built grid for {}-{:02}: {} blanks, {} days",
            year,
            month1,
            leading_blanks,
            days
        );

        Ok(cells)
    }

    pub fn build_for(
        cursor: MonthCursor,
        statuses: &StatusMap,
    ) -> Result<Vec<CalendarCell>, CalendarError> {
        Self::build(cursor.year(), cursor.month(), statuses)
    }

    /// Build from an untyped `YYYY-MM-DD -> status` map.
    ///
    /// The month is checked before any key so that the reported error does
    /// not depend on map iteration order.
    pub fn build_from_raw<I, K, V>(
        year: i32,
        month: u32,
        raw: I,
    ) -> Result<Vec<CalendarCell>, CalendarError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        let statuses = parse_status_map(raw)?;
        Self::build(year, month, &statuses)
    }

    /// Effective status of a single day.
    pub fn status_for(date: NaiveDate, statuses: &StatusMap) -> AttendanceStatus {
        match statuses.get(&date) {
            Some(status) => *status,
            None if date::is_weekend(date) => AttendanceStatus::Weekend,
            None => AttendanceStatus::Unmarked,
        }
    }

    /// Split a grid into rows of seven for a Sunday-first layout.
    /// The final row is shorter when the month does not end on a Saturday.
    pub fn weeks(cells: &[CalendarCell]) -> Chunks<'_, CalendarCell> {
        cells.chunks(DAYS_IN_WEEK)
    }
}

/// Convert string keys and values into a typed [`StatusMap`].
///
/// Keys must be canonical `YYYY-MM-DD` dates and values lowercase status
/// names; anything else is rejected rather than silently dropped.
pub fn parse_status_map<I, K, V>(raw: I) -> Result<StatusMap, CalendarError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut statuses = StatusMap::new();
    for (key, value) in raw {
        let key = key.as_ref();
        let date =
            date::parse_iso_date(key).ok_or_else(|| CalendarError::InvalidDate(key.to_string()))?;
        let status = value
            .as_ref()
            .parse::<AttendanceStatus>()
            .map_err(|e| CalendarError::invalid_status(key, e))?;
        statuses.insert(date, status);
    }
    Ok(statuses)
}
