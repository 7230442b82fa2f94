//! Time-of-day parsing and the serde adapter shift times use.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

/// Parse a time-of-day as either `HH:MM` or `HH:MM:SS`.
/// Backends are not consistent about which one they send.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Serde adapter for shift times-of-day (tolerates both `HH:MM` and `HH:MM:SS`).
pub fn de_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time: {raw}")))
}
