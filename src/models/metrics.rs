//! The derived, display-ready record for one time log.

use crate::core::breaks::BreakTotals;
use crate::extract::GeoSummary;
use crate::models::overtime::ApprovalStatus;
use crate::models::shift::ShiftWindow;
use crate::utils::formatting::PLACEHOLDER;
use chrono::NaiveDate;
use std::fmt;

/// What the overtime column says for a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeLabel {
    /// A request exists; its status is shown verbatim.
    Status(ApprovalStatus),
    /// Overtime was worked but never submitted for approval.
    NoApproval,
    /// No overtime in play.
    None,
}

impl fmt::Display for OvertimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OvertimeLabel::Status(s) => f.write_str(s.as_str()),
            OvertimeLabel::NoApproval => f.write_str("No Approval"),
            OvertimeLabel::None => f.write_str(PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeLogMetrics {
    pub log_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub active: bool,

    /// Clocked minutes; `None` while the log is still running.
    pub gross_minutes: Option<i64>,
    pub breaks: BreakTotals,

    pub late_minutes: i64,
    pub net_minutes: i64,
    pub work_inside_minutes: i64,
    /// The ceiling an employee may request approval for.
    pub raw_overtime_minutes: i64,

    pub overtime_label: OvertimeLabel,
    /// Overtime credited by an approved request, capped at the raw figure.
    pub approved_minutes: i64,
    /// What the overtime column displays (approved when approved, raw
    /// otherwise).
    pub shown_overtime_minutes: i64,

    /// Payroll-relevant total: in-window work plus approved overtime.
    pub period_minutes: i64,

    /// Authoritative shift window, when one matched.
    pub shift: Option<ShiftWindow>,
    /// Names of every schedule applicable that day, for display.
    pub applicable_shifts: Vec<String>,

    pub device_in: String,
    pub device_out: String,
    pub loc_in: GeoSummary,
    pub loc_out: GeoSummary,
}
