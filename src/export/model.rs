//! Flat export rows derived from the metrics record, plus the column
//! visibility set callers choose from.

use crate::errors::{AppError, AppResult};
use crate::models::metrics::TimeLogMetrics;
use crate::models::time_log::LogStatus;
use crate::utils::formatting::{PLACEHOLDER, mins2readable};
use serde::Serialize;

/// One exportable row. Everything is already formatted for display; the
/// export targets differ only in which columns they keep.
#[derive(Serialize, Clone, Debug)]
pub struct MetricsExport {
    pub log_id: i64,
    pub user_id: i64,
    pub date: String,
    pub status: String,
    pub shift: String,
    pub late: String,
    pub worked: String,
    pub overtime: String,
    pub overtime_status: String,
    pub period: String,
    pub device_in: String,
    pub device_out: String,
    pub location_in: String,
    pub location_out: String,
}

impl MetricsExport {
    pub fn from_metrics(m: &TimeLogMetrics) -> Self {
        Self {
            log_id: m.log_id,
            user_id: m.user_id,
            date: m.date.format("%Y-%m-%d").to_string(),
            status: if m.active {
                LogStatus::Active
            } else {
                LogStatus::Completed
            }
            .as_str()
            .to_string(),
            shift: m
                .shift
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            late: mins2readable(m.late_minutes, false, true),
            worked: if m.active {
                PLACEHOLDER.to_string()
            } else {
                mins2readable(m.work_inside_minutes, false, true)
            },
            overtime: if m.active {
                PLACEHOLDER.to_string()
            } else {
                mins2readable(m.shown_overtime_minutes, false, true)
            },
            overtime_status: m.overtime_label.to_string(),
            period: if m.active {
                PLACEHOLDER.to_string()
            } else {
                mins2readable(m.period_minutes, false, true)
            },
            device_in: m.device_in.clone(),
            device_out: m.device_out.clone(),
            location_in: m.loc_in.text.clone(),
            location_out: m.loc_out.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    LogId,
    UserId,
    Date,
    Status,
    Shift,
    Late,
    Worked,
    Overtime,
    OvertimeStatus,
    Period,
    DeviceIn,
    DeviceOut,
    LocationIn,
    LocationOut,
}

/// The narrower fixed subset PDF exports use.
pub const PDF_COLUMNS: &[Column] = &[
    Column::Date,
    Column::UserId,
    Column::Shift,
    Column::Late,
    Column::Worked,
    Column::Overtime,
    Column::Period,
];

impl Column {
    pub fn all() -> &'static [Column] {
        &[
            Column::LogId,
            Column::UserId,
            Column::Date,
            Column::Status,
            Column::Shift,
            Column::Late,
            Column::Worked,
            Column::Overtime,
            Column::OvertimeStatus,
            Column::Period,
            Column::DeviceIn,
            Column::DeviceOut,
            Column::LocationIn,
            Column::LocationOut,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::LogId => "log_id",
            Column::UserId => "user_id",
            Column::Date => "date",
            Column::Status => "status",
            Column::Shift => "shift",
            Column::Late => "late",
            Column::Worked => "worked",
            Column::Overtime => "overtime",
            Column::OvertimeStatus => "overtime_status",
            Column::Period => "period",
            Column::DeviceIn => "device_in",
            Column::DeviceOut => "device_out",
            Column::LocationIn => "location_in",
            Column::LocationOut => "location_out",
        }
    }

    fn parse(s: &str) -> AppResult<Column> {
        Column::all()
            .iter()
            .copied()
            .find(|c| c.header().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidColumn(s.to_string()))
    }

    /// Parse a comma-separated visibility list; `None`/empty means all
    /// columns.
    pub fn parse_list(raw: Option<&str>) -> AppResult<Vec<Column>> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Column::all().to_vec()),
            Some(list) => list.split(',').map(|s| Column::parse(s.trim())).collect(),
        }
    }

    pub fn value(&self, row: &MetricsExport) -> String {
        match self {
            Column::LogId => row.log_id.to_string(),
            Column::UserId => row.user_id.to_string(),
            Column::Date => row.date.clone(),
            Column::Status => row.status.clone(),
            Column::Shift => row.shift.clone(),
            Column::Late => row.late.clone(),
            Column::Worked => row.worked.clone(),
            Column::Overtime => row.overtime.clone(),
            Column::OvertimeStatus => row.overtime_status.clone(),
            Column::Period => row.period.clone(),
            Column::DeviceIn => row.device_in.clone(),
            Column::DeviceOut => row.device_out.clone(),
            Column::LocationIn => row.location_in.clone(),
            Column::LocationOut => row.location_out.clone(),
        }
    }
}

pub(crate) fn headers(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(Column::header).collect()
}

pub(crate) fn to_row(row: &MetricsExport, columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.value(row)).collect()
}

pub(crate) fn to_table(rows: &[MetricsExport], columns: &[Column]) -> Vec<Vec<String>> {
    rows.iter().map(|r| to_row(r, columns)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_lists() {
        let cols = Column::parse_list(Some("date,worked, overtime")).unwrap();
        assert_eq!(cols, vec![Column::Date, Column::Worked, Column::Overtime]);

        assert_eq!(Column::parse_list(None).unwrap(), Column::all().to_vec());
        assert!(Column::parse_list(Some("bogus")).is_err());
    }

    #[test]
    fn pdf_subset_is_a_subset() {
        for c in PDF_COLUMNS {
            assert!(Column::all().contains(c));
        }
        assert!(PDF_COLUMNS.len() < Column::all().len());
    }
}
