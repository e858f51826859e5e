use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{approx, init_db_with_data, json_stdout, rat, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_show_day() {
    let db_path = setup_test_db("add_and_show_day");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "show", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("09:00").and(contains("10:00-10:30")).and(contains("7.00")).and(contains("8.50")));
}

#[test]
fn test_show_json_contains_summary() {
    let db_path = setup_test_db("show_json_summary");
    init_db_with_data(&db_path);

    let v = json_stdout(rat().args(["--db", &db_path, "show", "2025-09-01", "--json"]));

    assert_eq!(v["raw"]["date"], "2025-09-01");
    assert_eq!(v["raw"]["start_time"], "09:00");
    assert!(approx(v["summary"]["work_hours"].as_f64().unwrap(), 9.0));
    assert!(approx(v["summary"]["break_total_hours"].as_f64().unwrap(), 1.0));
    assert!(approx(v["summary"]["actual_work_hours"].as_f64().unwrap(), 8.0));
    assert!(approx(v["summary"]["gross_hours"].as_f64().unwrap(), 9.0));
}

#[test]
fn test_show_missing_day_is_not_found() {
    let db_path = setup_test_db("show_missing_day");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "show", "2025-09-20"])
        .assert()
        .failure()
        .stderr(contains("No attendance record found for 2025-09-20"));
}

#[test]
fn test_add_merges_with_existing_record() {
    let db_path = setup_test_db("add_merges_existing");
    init_db_with_data(&db_path);

    // only the comment changes; times and break are kept
    rat()
        .args(["--db", &db_path, "add", "2025-09-01", "--comment", "client visit"])
        .assert()
        .success();

    let v = json_stdout(rat().args(["--db", &db_path, "show", "2025-09-01", "--json"]));
    assert_eq!(v["raw"]["start_time"], "09:00");
    assert_eq!(v["raw"]["end_time"], "18:00");
    assert_eq!(v["raw"]["break_minutes"], 60);
    assert_eq!(v["raw"]["comment"], "client visit");
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_rejects_invalid");

    rat()
        .args(["--db", &db_path, "add", "2025-09-01", "--in", "9h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9h"));

    rat()
        .args(["--db", &db_path, "add", "2025-13-01", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rat()
        .args(["--db", &db_path, "add", "2025-09-01", "--interrupt", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid interruption"));

    rat()
        .args(["--db", &db_path, "add", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));
}

#[test]
fn test_list_sparse_and_full() {
    let db_path = setup_test_db("list_sparse_full");
    init_db_with_data(&db_path);

    let sparse = json_stdout(rat().args(["--db", &db_path, "list", "--month", "2025-09", "--json"]));
    assert_eq!(sparse.as_array().unwrap().len(), 2);

    let full = json_stdout(rat().args([
        "--db", &db_path, "list", "--month", "2025-09", "--full", "--json",
    ]));
    let days = full.as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0]["raw"]["date"], "2025-09-01");
    assert_eq!(days[29]["raw"]["date"], "2025-09-30");
    assert!(approx(days[2]["summary"]["work_hours"].as_f64().unwrap(), 0.0));

    rat()
        .args(["--db", &db_path, "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").and(contains("2025-09-02")));
}

#[test]
fn test_invalid_month_is_rejected() {
    let db_path = setup_test_db("invalid_month");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "summary", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 2025-13"));

    rat()
        .args(["--db", &db_path, "list", "--month", "September"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_summary_json_totals() {
    let db_path = setup_test_db("summary_json_totals");
    init_db_with_data(&db_path);

    let v = json_stdout(rat().args(["--db", &db_path, "summary", "--month", "2025-09", "--json"]));

    assert_eq!(v["month"], "2025-09");
    assert!(approx(v["work_total_hours"].as_f64().unwrap(), 17.0));
    assert!(approx(v["break_total_hours"].as_f64().unwrap(), 1.5));
    assert!(approx(v["interrupt_total_hours"].as_f64().unwrap(), 0.5));
    assert!(approx(v["side_job_total_hours"].as_f64().unwrap(), 1.0));
    assert!(approx(v["gross_total_hours"].as_f64().unwrap(), 18.0));
    assert!(approx(v["actual_work_hours"].as_f64().unwrap(), 15.0));
    assert_eq!(v["work_days"], 2);
    assert_eq!(v["gross_days"], 2);

    // zero-filled days do not change the totals
    let full = json_stdout(rat().args([
        "--db", &db_path, "summary", "--month", "2025-09", "--full", "--json",
    ]));
    assert_eq!(full["work_days"], 2);
    assert!(approx(full["actual_work_hours"].as_f64().unwrap(), 15.0));
}

#[test]
fn test_forecast_with_holiday() {
    let db_path = setup_test_db("forecast_with_holiday");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "holiday", "add", "2025-09-15", "Patron saint"])
        .assert()
        .success();

    let v = json_stdout(rat().args([
        "--db", &db_path, "forecast", "--month", "2025-09", "--series", "--json",
    ]));

    // 22 weekdays, 2 registered, 1 holiday
    assert_eq!(v["month"], "2025-09");
    assert_eq!(v["unregistered_days"], 19);
    assert_eq!(v["holiday_days"], 1);
    assert!(approx(v["registered_work_hours"].as_f64().unwrap(), 15.0));
    assert!(approx(v["predicted_work_hours"].as_f64().unwrap(), 15.0 + 8.0 * 19.0));
    assert_eq!(v["band"], "within");

    let series = v["series"].as_array().unwrap();
    assert_eq!(series.len(), 30);
    let last = &series[29];
    assert!(approx(
        last["forecast_cumulative"].as_f64().unwrap(),
        v["predicted_work_hours"].as_f64().unwrap()
    ));
    assert!(approx(last["actual_cumulative"].as_f64().unwrap(), 15.0));
}

#[test]
fn test_forecast_empty_month_uses_flat_allowance() {
    let db_path = setup_test_db("forecast_empty_month");

    let v = json_stdout(rat().args(["--db", &db_path, "forecast", "--month", "2025-02", "--json"]));

    // February 2025 has 20 weekdays
    assert!(approx(v["predicted_work_hours"].as_f64().unwrap(), 160.0));
    assert_eq!(v["unregistered_days"], 20);
    assert_eq!(v["band"], "within");
    assert!(v.get("series").is_none());
}

#[test]
fn test_trend_ends_at_requested_month() {
    let db_path = setup_test_db("trend_months");
    init_db_with_data(&db_path);

    let v = json_stdout(rat().args([
        "--db", &db_path, "trend", "--until", "2025-10", "--months", "3", "--json",
    ]));
    let points = v.as_array().unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["month"], "2025-08");
    assert_eq!(points[1]["month"], "2025-09");
    assert_eq!(points[2]["month"], "2025-10");
    assert_eq!(points[1]["work_days"], 2);
    assert!(approx(points[1]["actual_work_hours"].as_f64().unwrap(), 15.0));
    assert_eq!(points[2]["work_days"], 0);
}

#[test]
fn test_trend_month_count_is_bounded() {
    let db_path = setup_test_db("trend_month_bounds");

    rat()
        .args(["--db", &db_path, "trend", "--months", "30000", "--json"])
        .assert()
        .failure()
        .stderr(contains("--months must be between 1 and 120"));

    rat()
        .args(["--db", &db_path, "trend", "--months", "0"])
        .assert()
        .failure()
        .stderr(contains("--months must be between 1 and 120"));

    let v = json_stdout(rat().args([
        "--db", &db_path, "trend", "--until", "2025-09", "--months", "120", "--json",
    ]));
    let points = v.as_array().unwrap();
    assert_eq!(points.len(), 120);
    assert_eq!(points[0]["month"], "2015-10");
}

#[test]
fn test_delete_day() {
    let db_path = setup_test_db("delete_day");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rat()
        .args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("No attendance record found"));

    // a second delete reports not-found instead of succeeding silently
    rat()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No attendance record found for 2025-09-01"));
}

#[test]
fn test_holiday_lifecycle() {
    let db_path = setup_test_db("holiday_lifecycle");

    rat()
        .args(["--db", &db_path, "holiday", "add", "2025-12-25", "Christmas"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "holiday", "add", "2025-12-25", "Again"])
        .assert()
        .failure()
        .stderr(contains("A holiday already exists for 2025-12-25"));

    rat()
        .args(["--db", &db_path, "holiday", "update", "2025-12-25", "Christmas Day"])
        .assert()
        .success();

    let v = json_stdout(rat().args([
        "--db", &db_path, "holiday", "list", "--month", "2025-12", "--json",
    ]));
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Christmas Day");

    rat()
        .args(["--db", &db_path, "holiday", "del", "2025-12-25"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "holiday", "del", "2025-12-25"])
        .assert()
        .failure()
        .stderr(contains("No holiday found for 2025-12-25"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("init")
                .and(contains("2025-09-01"))
                .and(contains("migration_applied")),
        );
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(
            contains("Attendance records")
                .and(contains("2025-09-01"))
                .and(contains("Integrity check completed")),
        );
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copies_db");
    init_db_with_data(&db_path);

    let dest = common::temp_out("backup_copies_db", "sqlite");

    rat()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
