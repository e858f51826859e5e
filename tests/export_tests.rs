use predicates::str::contains;
use std::fs;

mod common;
use common::{approx, init_db_with_data, rat, setup_test_db, temp_out};

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_month", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-09",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "date,start_time,end_time,break_hours,interrupt_hours,side_job_hours,work_hours,actual_work_hours,gross_hours,comment"
    );
    assert!(lines.next().unwrap().starts_with("2025-09-01,09:00,18:00,1.0,"));
    assert!(lines.next().unwrap().starts_with("2025-09-02,09:00,17:00,0.5,0.5,1.0,8.0,7.0,8.5"));
    assert!(lines.next().is_none());
}

#[test]
fn test_export_json_single_day() {
    let db_path = setup_test_db("export_json_day");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_day", "json");

    rat()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range",
            "2025-09-02", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = v.as_array().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-02");
    assert!(approx(rows[0]["actual_work_hours"].as_f64().unwrap(), 7.0));
    assert!(approx(rows[0]["gross_hours"].as_f64().unwrap(), 8.5));
}

#[test]
fn test_export_all_when_no_range() {
    let db_path = setup_test_db("export_all_no_range");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "add", "2024-12-31", "--in", "08:00", "--out", "12:00"])
        .assert()
        .success();

    let out = temp_out("export_all_no_range", "json");
    rat()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2024-12-31");
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let db_path = setup_test_db("export_xlsx_pdf");
    init_db_with_data(&db_path);

    for (format, ext) in [("xlsx", "xlsx"), ("pdf", "pdf")] {
        let out = temp_out("export_xlsx_pdf", ext);

        rat()
            .args([
                "--db", &db_path, "export", "--format", format, "--file", &out, "--range",
                "2025", "--force",
            ])
            .assert()
            .success();

        let meta = fs::metadata(&out).expect("output file exists");
        assert!(meta.len() > 0);
    }

    let pdf = fs::read(temp_out_path("export_xlsx_pdf", "pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

fn temp_out_path(name: &str, ext: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}_out.{}", name, ext))
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_bad_range", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "2025-09:2025",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid range"));

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "2025-10:2025-09",
        ])
        .assert()
        .failure()
        .stderr(contains("start is after end"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty_range", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2023",
        ])
        .assert()
        .success()
        .stdout(contains("No attendance records found"));

    assert!(!std::path::Path::new(&out).exists());
}
