use chrono::Datelike;

use crate::models::attendance::AttendanceStatus;
use crate::models::calendar::{CalendarCell, MonthCursor, WEEKDAY_LABELS};
use crate::services::attendance::AttendanceSummary;
use crate::services::calendar::CalendarGridBuilder;

const CELL_WIDTH: usize = 5;

pub struct MonthView;

impl MonthView {
    /// Title line, weekday header and one line per week.
    pub fn render(cursor: MonthCursor, cells: &[CalendarCell]) -> String {
        let mut out = String::new();
        let width = CELL_WIDTH * WEEKDAY_LABELS.len();

        out.push_str(&format!("{:^width$}\n", cursor.title(), width = width));
        for label in WEEKDAY_LABELS {
            out.push_str(&format!("{:^width$}", label, width = CELL_WIDTH));
        }
        out.push('\n');

        for week in CalendarGridBuilder::weeks(cells) {
            let line: String = week.iter().map(Self::render_cell).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }

    /// One entry per school-day status, as on the summary cards.
    pub fn render_summary(summary: &AttendanceSummary) -> String {
        let mut parts: Vec<String> = AttendanceStatus::ALL
            .into_iter()
            .filter(AttendanceStatus::is_school_day_mark)
            .map(|status| {
                format!(
                    "{} {}: {}",
                    status.icon().unwrap_or_default(),
                    status.label(),
                    summary.count(status)
                )
            })
            .collect();
        if let Some(rate) = summary.attendance_rate() {
            parts.push(format!("Attendance: {:.0}%", rate * 100.0));
        }
        parts.join("  ")
    }

    /// Key for the one-character cell codes. Unmarked days have no code.
    pub fn legend() -> String {
        AttendanceStatus::ALL
            .into_iter()
            .filter(|status| !status.label().is_empty())
            .map(|status| format!("{} {}", Self::status_code(status), status.label()))
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn render_cell(cell: &CalendarCell) -> String {
        match cell {
            CalendarCell::Empty => " ".repeat(CELL_WIDTH),
            CalendarCell::Day { date, status } => {
                format!(" {:>2}{} ", date.day(), Self::status_code(*status))
            }
        }
    }

    fn status_code(status: AttendanceStatus) -> char {
        match status {
            AttendanceStatus::Present => 'P',
            AttendanceStatus::Absent => 'A',
            AttendanceStatus::Leave => 'L',
            AttendanceStatus::Weekend => '.',
            AttendanceStatus::Unmarked => ' ',
        }
    }
}
