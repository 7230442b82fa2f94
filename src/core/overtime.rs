//! Overtime reconciliation: merge the computed raw overtime with the latest
//! approval record into what the overtime column shows and what payroll
//! credits.

use crate::errors::{AppError, AppResult};
use crate::models::metrics::OvertimeLabel;
use crate::models::overtime::{ApprovalStatus, OvertimeRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeOutcome {
    pub label: OvertimeLabel,
    /// Minutes payroll credits: only an approved request counts, capped at
    /// the raw computed figure.
    pub approved_minutes: i64,
    /// Minutes the overtime column displays.
    pub shown_minutes: i64,
}

pub fn reconcile(raw_overtime_minutes: i64, latest: Option<&OvertimeRequest>) -> OvertimeOutcome {
    match latest {
        Some(req) => {
            let approved_minutes = if req.status == ApprovalStatus::Approved {
                req.requested_minutes().min(raw_overtime_minutes)
            } else {
                0
            };
            let shown_minutes = if req.status == ApprovalStatus::Approved {
                approved_minutes
            } else {
                raw_overtime_minutes
            };
            OvertimeOutcome {
                label: OvertimeLabel::Status(req.status),
                approved_minutes,
                shown_minutes,
            }
        }
        None => OvertimeOutcome {
            label: if raw_overtime_minutes > 0 {
                OvertimeLabel::NoApproval
            } else {
                OvertimeLabel::None
            },
            approved_minutes: 0,
            shown_minutes: raw_overtime_minutes,
        },
    }
}

/// Client-side gate for submitting a new request: the reason is required and
/// the requested amount may not exceed the computed ceiling.
pub fn validate_request(
    raw_overtime_minutes: i64,
    requested_hours: f64,
    reason: Option<&str>,
) -> AppResult<()> {
    if reason.map(str::trim).filter(|r| !r.is_empty()).is_none() {
        return Err(AppError::MissingReason);
    }

    let requested = (requested_hours * 60.0).round() as i64;
    if requested <= 0 || requested > raw_overtime_minutes {
        return Err(AppError::OvertimeExceedsCeiling {
            requested,
            ceiling: raw_overtime_minutes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn req(status: ApprovalStatus, hours: f64) -> OvertimeRequest {
        OvertimeRequest {
            id: 1,
            time_log_id: 1,
            approver_id: Some(2),
            status,
            requested_hours: hours,
            requester_reason: Some("deadline".into()),
            approver_comments: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 6, 18, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn approved_caps_at_requested_hours() {
        // approved 1h against raw 180 → show 60, credit 60
        let out = reconcile(180, Some(&req(ApprovalStatus::Approved, 1.0)));
        assert_eq!(out.label, OvertimeLabel::Status(ApprovalStatus::Approved));
        assert_eq!(out.approved_minutes, 60);
        assert_eq!(out.shown_minutes, 60);
    }

    #[test]
    fn approved_caps_at_raw_when_request_is_larger() {
        let out = reconcile(45, Some(&req(ApprovalStatus::Approved, 2.0)));
        assert_eq!(out.approved_minutes, 45);
        assert_eq!(out.shown_minutes, 45);
    }

    #[test]
    fn pending_and_rejected_credit_nothing() {
        let out = reconcile(90, Some(&req(ApprovalStatus::Pending, 1.5)));
        assert_eq!(out.label, OvertimeLabel::Status(ApprovalStatus::Pending));
        assert_eq!(out.approved_minutes, 0);
        assert_eq!(out.shown_minutes, 90);

        let out = reconcile(90, Some(&req(ApprovalStatus::Rejected, 1.5)));
        assert_eq!(out.label, OvertimeLabel::Status(ApprovalStatus::Rejected));
        assert_eq!(out.approved_minutes, 0);
    }

    #[test]
    fn no_request_labels() {
        assert_eq!(reconcile(30, None).label, OvertimeLabel::NoApproval);
        assert_eq!(reconcile(30, None).shown_minutes, 30);
        assert_eq!(reconcile(0, None).label, OvertimeLabel::None);
    }

    #[test]
    fn request_validation() {
        assert!(validate_request(120, 1.0, Some("release night")).is_ok());
        assert!(matches!(
            validate_request(120, 3.0, Some("x")),
            Err(AppError::OvertimeExceedsCeiling {
                requested: 180,
                ceiling: 120
            })
        ));
        assert!(matches!(
            validate_request(120, 0.0, Some("x")),
            Err(AppError::OvertimeExceedsCeiling { .. })
        ));
        assert!(matches!(
            validate_request(120, 1.0, Some("   ")),
            Err(AppError::MissingReason)
        ));
        assert!(matches!(
            validate_request(120, 1.0, None),
            Err(AppError::MissingReason)
        ));
    }
}
