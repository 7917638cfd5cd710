// Attendance module
// Per-day attendance status and the sparse date -> status lookup

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sparse mapping of calendar dates to an explicit attendance status.
pub type StatusMap = BTreeMap<NaiveDate, AttendanceStatus>;

/// Attendance recorded (or defaulted) for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    Weekend,
    #[default]
    Unmarked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attendance status '{0}'")]
pub struct ParseStatusError(pub String);

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
        AttendanceStatus::Weekend,
        AttendanceStatus::Unmarked,
    ];

    /// Lowercase wire name, as used in status files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Weekend => "weekend",
            AttendanceStatus::Unmarked => "unmarked",
        }
    }

    /// Caption shown under the day number. Unmarked days have none.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Weekend => "Weekend",
            AttendanceStatus::Unmarked => "",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            AttendanceStatus::Present => Some("✅"),
            AttendanceStatus::Absent => Some("❌"),
            AttendanceStatus::Leave => Some("🌴"),
            AttendanceStatus::Weekend | AttendanceStatus::Unmarked => None,
        }
    }

    /// True for statuses that count toward the attendance rate
    pub fn is_school_day_mark(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Absent | AttendanceStatus::Leave
        )
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
