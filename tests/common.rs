#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plog() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique dataset directory inside the system temp dir, wiping any
/// previous run's leftovers.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_punchlog_data"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path.to_string_lossy().to_string()
}

/// Temporary output file path for exports.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn write(dir: &str, file: &str, content: &str) {
    let mut path = PathBuf::from(dir);
    path.push(file);
    fs::write(path, content).expect("write dataset file");
}

/// Populate a dataset covering the interesting shapes:
/// - log 1 (user 7): Mon 2025-01-06, 09:15–18:00, scheduled 09:00–17:00,
///   lunch floor 60 → late 15, worked 06:45, raw overtime 01:00, no request
/// - log 2 (user 7): Sat 2025-01-04, 08:00–18:00, unscheduled → worked
///   07:00, raw overtime 03:00, approved request for 1h → shown 01:00
/// - log 3 (user 8): Tue 2025-01-07, still clocked in
pub fn init_dataset(dir: &str) {
    write(
        dir,
        "settings.json",
        r#"{ "data": [ { "defaultShiftHours": 8, "minimumLunchMinutes": 60 } ] }"#,
    );

    write(
        dir,
        "schedules.json",
        r#"{ "data": [ {
            "id": 1,
            "assignedToAll": true,
            "startDate": "2025-01-01",
            "recurrenceRule": "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR",
            "shiftName": "Day",
            "startTime": "09:00",
            "endTime": "17:00"
        } ] }"#,
    );

    write(
        dir,
        "timelogs.json",
        r#"{ "data": [
            {
                "id": 1,
                "userId": 7,
                "timeIn": "2025-01-06T09:15:00Z",
                "timeOut": "2025-01-06T18:00:00Z",
                "deviceIn": "{\"manufacturer\":\"Acme\",\"model\":\"X1\"}",
                "locIn": { "latitude": 14.5995, "longitude": 120.9842 }
            },
            {
                "id": 2,
                "userId": 7,
                "timeIn": "2025-01-04T08:00:00Z",
                "timeOut": "2025-01-04T18:00:00Z"
            },
            {
                "id": 3,
                "userId": 8,
                "timeIn": "2025-01-07T09:00:00Z"
            }
        ] }"#,
    );

    write(
        dir,
        "overtime.json",
        r#"{ "data": [ {
            "id": 10,
            "timeLogId": 2,
            "approverId": 99,
            "status": "approved",
            "requestedHours": 1.0,
            "requesterReason": "release night",
            "createdAt": "2025-01-04T19:00:00Z",
            "updatedAt": "2025-01-05T08:00:00Z"
        } ] }"#,
    );

    write(
        dir,
        "locations.json",
        r#"{ "data": [ {
            "id": 1, "name": "HQ", "latitude": 14.5995, "longitude": 120.9842, "radius": 150.0
        } ] }"#,
    );

    write(
        dir,
        "restrictions.json",
        r#"{ "data": [ { "userId": 7, "locationId": 1, "restrictionStatus": true } ] }"#,
    );
}

/// Same logs but with per-day assignments instead of recurrence templates,
/// to exercise the daily-assignment resolver path.
pub fn init_dataset_daily(dir: &str) {
    init_dataset(dir);
    fs::remove_file(PathBuf::from(dir).join("schedules.json")).ok();
    write(
        dir,
        "daily_shifts.json",
        r#"{ "data": [ {
            "userId": 7,
            "date": "2025-01-06",
            "shiftName": "Assigned Day",
            "startTime": "09:00:00",
            "endTime": "17:00:00"
        } ] }"#,
    );
}
