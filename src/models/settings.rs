use serde::Deserialize;

/// Company-wide constants consumed read-only by the derivation engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    /// Caps unscheduled work, in hours.
    pub default_shift_hours: i64,
    /// Floor applied to the lunch deduction; absent or zero means
    /// "deduct actual lunch only".
    #[serde(default)]
    pub minimum_lunch_minutes: Option<i64>,
}

impl CompanySettings {
    pub fn default_shift_minutes(&self) -> i64 {
        self.default_shift_hours * 60
    }

    pub fn lunch_floor(&self) -> i64 {
        self.minimum_lunch_minutes.unwrap_or(0)
    }
}
