//! Dataset loading: JSON documents shaped like the upstream REST responses
//! (`{ "data": [...], "error": ... }`), one file per resource, in a data
//! directory.
//!
//! Failure policy mirrors the upstream screens: a missing optional file just
//! leaves that list empty, and an envelope carrying an `error` string is
//! surfaced as a warning without aborting the rest of the load.

use crate::config::Config;
use crate::core::schedule::{DailyAssignmentResolver, RecurrenceRuleResolver, ScheduleResolver};
use crate::errors::{AppError, AppResult};
use crate::models::location::{GeoLocation, LocationRestriction};
use crate::models::overtime::OvertimeRequest;
use crate::models::settings::CompanySettings;
use crate::models::shift::{DailyShift, ShiftTemplate};
use crate::models::time_log::TimeLog;
use crate::ui::messages::warning;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const TIMELOGS_FILE: &str = "timelogs.json";
pub const SCHEDULES_FILE: &str = "schedules.json";
pub const DAILY_SHIFTS_FILE: &str = "daily_shifts.json";
pub const OVERTIME_FILE: &str = "overtime.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const RESTRICTIONS_FILE: &str = "restrictions.json";

/// The REST response envelope every resource file uses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    // a path default keeps the derive from demanding T: Default
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug)]
pub struct Dataset {
    pub time_logs: Vec<TimeLog>,
    pub templates: Vec<ShiftTemplate>,
    pub daily_shifts: Vec<DailyShift>,
    pub overtime_requests: Vec<OvertimeRequest>,
    pub settings: CompanySettings,
    pub locations: Vec<GeoLocation>,
    pub restrictions: Vec<LocationRestriction>,
}

impl Dataset {
    pub fn load(dir: &Path, cfg: &Config) -> AppResult<Self> {
        if !dir.is_dir() {
            return Err(AppError::Dataset {
                file: dir.display().to_string(),
                reason: "data directory does not exist (run `punchlog init` or pass --data)"
                    .to_string(),
            });
        }

        // Time logs are the one resource that must be present.
        let logs_path = dir.join(TIMELOGS_FILE);
        if !logs_path.exists() {
            return Err(AppError::Dataset {
                file: logs_path.display().to_string(),
                reason: "missing time logs file".to_string(),
            });
        }

        let time_logs = load_list(&logs_path)?;
        let templates = load_list_or_empty(&dir.join(SCHEDULES_FILE))?;
        let daily_shifts = load_list_or_empty(&dir.join(DAILY_SHIFTS_FILE))?;
        let overtime_requests = load_list_or_empty(&dir.join(OVERTIME_FILE))?;
        let locations = load_list_or_empty(&dir.join(LOCATIONS_FILE))?;
        let restrictions = load_list_or_empty(&dir.join(RESTRICTIONS_FILE))?;

        let settings = load_settings(&dir.join(SETTINGS_FILE), cfg)?;

        Ok(Self {
            time_logs,
            templates,
            daily_shifts,
            overtime_requests,
            settings,
            locations,
            restrictions,
        })
    }

    /// Pick the schedule resolver by which backing data was loaded: per-day
    /// assignments win when present, recurrence templates otherwise.
    pub fn schedule_resolver(&self) -> Box<dyn ScheduleResolver> {
        if !self.daily_shifts.is_empty() {
            Box::new(DailyAssignmentResolver::new(self.daily_shifts.clone()))
        } else {
            Box::new(RecurrenceRuleResolver::new(self.templates.clone()))
        }
    }

    pub fn find_log(&self, id: i64) -> AppResult<&TimeLog> {
        self.time_logs
            .iter()
            .find(|l| l.id == id)
            .ok_or(AppError::LogNotFound(id))
    }

    /// Geofences a user's clock-ins are restricted to (display only).
    pub fn restricted_locations(&self, user_id: i64) -> Vec<&GeoLocation> {
        self.restrictions
            .iter()
            .filter(|r| r.user_id == user_id && r.restriction_status)
            .filter_map(|r| self.locations.iter().find(|l| l.id == r.location_id))
            .collect()
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let raw = fs::read_to_string(path)?;
    let envelope: Envelope<T> = serde_json::from_str(&raw).map_err(|e| AppError::Dataset {
        file: file_name(path),
        reason: e.to_string(),
    })?;

    if let Some(err) = envelope.error {
        warning(format!("{}: upstream error: {}", file_name(path), err));
    }

    Ok(envelope.data)
}

fn load_list_or_empty<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    if path.exists() {
        load_list(path)
    } else {
        Ok(Vec::new())
    }
}

/// Company settings come from the dataset when present, from the config
/// fallbacks otherwise.
fn load_settings(path: &Path, cfg: &Config) -> AppResult<CompanySettings> {
    if path.exists() {
        let mut list: Vec<CompanySettings> = load_list(path)?;
        if let Some(settings) = list.drain(..).next() {
            return Ok(settings);
        }
    }
    Ok(CompanySettings {
        default_shift_hours: cfg.default_shift_hours,
        minimum_lunch_minutes: cfg.minimum_lunch_minutes,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
