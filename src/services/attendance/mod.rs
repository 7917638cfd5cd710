// Attendance service
// Monthly summary counts and status file loading

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::models::attendance::{AttendanceStatus, StatusMap};
use crate::models::calendar::CalendarCell;
use crate::services::calendar::parse_status_map;

/// Per-status day counts for one month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub leave: u32,
    pub weekend: u32,
    pub unmarked: u32,
}

impl AttendanceSummary {
    pub fn from_cells(cells: &[CalendarCell]) -> Self {
        cells
            .iter()
            .filter_map(CalendarCell::status)
            .fold(Self::default(), |mut summary, status| {
                *summary.count_mut(status) += 1;
                summary
            })
    }

    pub fn count(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Leave => self.leave,
            AttendanceStatus::Weekend => self.weekend,
            AttendanceStatus::Unmarked => self.unmarked,
        }
    }

    fn count_mut(&mut self, status: AttendanceStatus) -> &mut u32 {
        match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Absent => &mut self.absent,
            AttendanceStatus::Leave => &mut self.leave,
            AttendanceStatus::Weekend => &mut self.weekend,
            AttendanceStatus::Unmarked => &mut self.unmarked,
        }
    }

    pub fn total_days(&self) -> u32 {
        self.present + self.absent + self.leave + self.weekend + self.unmarked
    }

    /// Share of marked school days spent present, in `0.0..=1.0`.
    ///
    /// Weekends and unmarked days are excluded. Returns `None` when nothing
    /// has been marked yet.
    pub fn attendance_rate(&self) -> Option<f64> {
        let marked: u32 = AttendanceStatus::ALL
            .into_iter()
            .filter(AttendanceStatus::is_school_day_mark)
            .map(|status| self.count(status))
            .sum();
        (marked > 0).then(|| f64::from(self.present) / f64::from(marked))
    }
}

/// Load a JSON object of `"YYYY-MM-DD": "status"` pairs.
pub fn load_status_file(path: &Path) -> Result<StatusMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read status file {}", path.display()))?;
    parse_status_json(&content)
        .with_context(|| format!("Invalid status file {}", path.display()))
}

pub fn parse_status_json(content: &str) -> Result<StatusMap> {
    let raw: HashMap<String, String> =
        serde_json::from_str(content).context("Expected a JSON object of date -> status")?;
    let statuses = parse_status_map(&raw)?;
    log::debug!("Parsed {} attendance entries", statuses.len());
    Ok(statuses)
}
