use thiserror::Error;

use crate::models::attendance::ParseStatusError;

/// Invalid-argument failures raised while building a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("month index {0} is outside 0..=11")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("malformed date key '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown attendance status '{status}' for {date}")]
    InvalidStatus { date: String, status: String },
}

impl CalendarError {
    pub(crate) fn invalid_status(date: &str, err: ParseStatusError) -> Self {
        CalendarError::InvalidStatus {
            date: date.to_string(),
            status: err.0,
        }
    }
}
