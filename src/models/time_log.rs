use crate::extract::{self, GeoSummary};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One break inside a time log. Either bound may be missing while the break
/// is still running.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakInterval {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl BreakInterval {
    /// Minutes of a complete interval; `None` while in progress.
    pub fn minutes(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_minutes()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Active,
    Completed,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Active => "active",
            LogStatus::Completed => "completed",
        }
    }
}

/// One clock-in/clock-out session as the API sends it. Device and location
/// payloads arrive shapeless and are normalized at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: i64,
    pub user_id: i64,
    pub time_in: DateTime<Utc>,
    #[serde(default)]
    pub time_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub coffee_breaks: Vec<BreakInterval>,
    #[serde(default)]
    pub lunch_break: Option<BreakInterval>,
    #[serde(default)]
    pub device_in: Option<Value>,
    #[serde(default)]
    pub device_out: Option<Value>,
    #[serde(default)]
    pub loc_in: Option<Value>,
    #[serde(default)]
    pub loc_out: Option<Value>,
}

impl TimeLog {
    pub fn status(&self) -> LogStatus {
        if self.time_out.is_some() {
            LogStatus::Completed
        } else {
            LogStatus::Active
        }
    }

    /// UTC calendar date the log belongs to (the clock-in date).
    pub fn work_date(&self) -> NaiveDate {
        self.time_in.date_naive()
    }

    /// Total clocked minutes; `None` while the log is still active.
    pub fn gross_minutes(&self) -> Option<i64> {
        self.time_out.map(|out| (out - self.time_in).num_minutes())
    }

    pub fn device_in_summary(&self) -> String {
        extract::device_summary(self.device_in.as_ref())
    }

    pub fn device_out_summary(&self) -> String {
        extract::device_summary(self.device_out.as_ref())
    }

    pub fn loc_in_summary(&self) -> GeoSummary {
        extract::geo_summary(self.loc_in.as_ref())
    }

    pub fn loc_out_summary(&self) -> GeoSummary {
        extract::geo_summary(self.loc_out.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, h, m, 0).unwrap()
    }

    #[test]
    fn open_log_has_no_gross_duration() {
        let log = TimeLog {
            id: 1,
            user_id: 7,
            time_in: ts(9, 0),
            time_out: None,
            coffee_breaks: vec![],
            lunch_break: None,
            device_in: None,
            device_out: None,
            loc_in: None,
            loc_out: None,
        };
        assert_eq!(log.status(), LogStatus::Active);
        assert_eq!(log.gross_minutes(), None);
    }

    #[test]
    fn incomplete_break_yields_no_minutes() {
        let b = BreakInterval {
            start: Some(ts(10, 0)),
            end: None,
        };
        assert_eq!(b.minutes(), None);

        let b = BreakInterval {
            start: Some(ts(10, 0)),
            end: Some(ts(10, 20)),
        };
        assert_eq!(b.minutes(), Some(20));
    }
}
