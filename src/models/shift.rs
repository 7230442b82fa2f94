use crate::utils::time::de_time;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

/// A recurring shift assignment rule ("every MO,TU,... between these dates,
/// for this user or everyone").
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    pub id: i64,
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
    #[serde(default)]
    pub assigned_to_all: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Semicolon-delimited recurrence rule, e.g.
    /// `FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR`.
    pub recurrence_rule: String,
    pub shift_name: String,
    #[serde(deserialize_with = "de_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "de_time")]
    pub end_time: NaiveTime,
}

/// A pre-materialized per-day shift assignment, as some deployments store
/// instead of recurrence templates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyShift {
    pub user_id: i64,
    pub date: NaiveDate,
    pub shift_name: String,
    #[serde(deserialize_with = "de_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "de_time")]
    pub end_time: NaiveTime,
}

/// A shift's times-of-day anchored to a concrete calendar date. Overnight
/// shifts (end-of-day ≤ start-of-day) roll the end to the next day.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftWindow {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftWindow {
    pub fn anchor(name: &str, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        let start = date.and_time(start_time).and_utc();
        let mut end = date.and_time(end_time).and_utc();
        if end <= start {
            end += chrono::Duration::days(1);
        }
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }

    pub fn scheduled_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
