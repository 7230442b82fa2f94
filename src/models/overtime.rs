use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

/// An overtime approval workflow record, tied to exactly one time log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeRequest {
    pub id: i64,
    pub time_log_id: i64,
    #[serde(default)]
    pub approver_id: Option<i64>,
    pub status: ApprovalStatus,
    pub requested_hours: f64,
    #[serde(default)]
    pub requester_reason: Option<String>,
    #[serde(default)]
    pub approver_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OvertimeRequest {
    /// Recency key: updated-at when the approver has touched the record,
    /// created-at otherwise.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub fn requested_minutes(&self) -> i64 {
        (self.requested_hours * 60.0).round() as i64
    }
}

/// The authoritative request for a log when several exist.
pub fn latest_for_log(requests: &[OvertimeRequest], time_log_id: i64) -> Option<&OvertimeRequest> {
    requests
        .iter()
        .filter(|r| r.time_log_id == time_log_id)
        .max_by_key(|r| r.last_touched())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn req(id: i64, log: i64, status: ApprovalStatus, day: u32, updated: Option<u32>) -> OvertimeRequest {
        OvertimeRequest {
            id,
            time_log_id: log,
            approver_id: Some(99),
            status,
            requested_hours: 1.0,
            requester_reason: None,
            approver_comments: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap(),
            updated_at: updated.map(|d| Utc.with_ymd_and_hms(2025, 1, d, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn latest_prefers_most_recently_touched() {
        let requests = vec![
            req(1, 5, ApprovalStatus::Rejected, 2, Some(3)),
            // created earlier but approved later
            req(2, 5, ApprovalStatus::Approved, 1, Some(8)),
            req(3, 6, ApprovalStatus::Pending, 9, None),
        ];
        let latest = latest_for_log(&requests, 5).unwrap();
        assert_eq!(latest.id, 2);
        assert!(latest_for_log(&requests, 42).is_none());
    }

    #[test]
    fn requested_minutes_rounds() {
        let mut r = req(1, 1, ApprovalStatus::Pending, 1, None);
        r.requested_hours = 1.5;
        assert_eq!(r.requested_minutes(), 90);
        r.requested_hours = 0.249;
        assert_eq!(r.requested_minutes(), 15);
    }
}
