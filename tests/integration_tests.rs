use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_dataset, init_dataset_daily, plog, setup_data_dir};

#[test]
fn test_list_month_shows_derived_metrics() {
    let data = setup_data_dir("list_month");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2025-01"])
        .assert()
        .success()
        // scheduled Monday log: late 15, worked 405, overtime 60 pending no approval
        .stdout(
            contains("00:15")
                .and(contains("06:45"))
                .and(contains("No Approval"))
                // unscheduled Saturday log with approved 1h: shown overtime 01:00
                .and(contains("07:00"))
                .and(contains("approved")),
        );
}

#[test]
fn test_list_single_day() {
    let data = setup_data_dir("list_single_day");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("2025-01-06").and(contains("Day")));
}

#[test]
fn test_list_active_log_renders_placeholders() {
    let data = setup_data_dir("list_active");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2025-01-07", "--user", "8"])
        .assert()
        .success()
        .stdout(contains("—"));
}

#[test]
fn test_list_details_show_breakdown_and_geofence() {
    let data = setup_data_dir("list_details");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2025-01-06", "--details"])
        .assert()
        .success()
        .stdout(
            contains("Acme, X1")
                .and(contains("14.5995, 120.9842"))
                .and(contains("HQ")),
        );
}

#[test]
fn test_list_daily_assignment_resolver() {
    let data = setup_data_dir("list_daily");
    init_dataset_daily(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2025-01-06"])
        .assert()
        .success()
        .stdout(contains("Assigned Day").and(contains("06:45")));
}

#[test]
fn test_list_rejects_bad_period() {
    let data = setup_data_dir("list_bad_period");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "garbage"])
        .assert()
        .failure()
        .stderr(contains("Invalid period or range"));
}

#[test]
fn test_list_empty_period() {
    let data = setup_data_dir("list_empty_period");
    init_dataset(&data);

    plog()
        .args(["--data", &data, "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("No time logs"));
}

#[test]
fn test_missing_data_dir_fails_with_hint() {
    plog()
        .args(["--data", "/nonexistent/punchlog-data", "list"])
        .assert()
        .failure()
        .stderr(contains("data directory does not exist"));
}

#[test]
fn test_init_creates_dataset_dir() {
    let data = setup_data_dir("init_creates");
    // remove it so init has something to do
    std::fs::remove_dir_all(&data).ok();

    plog()
        .args(["--test", "init", "--data-dir", &data])
        .assert()
        .success()
        .stdout(contains("Dataset directory"));

    assert!(std::path::Path::new(&data).is_dir());
}
