#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add two days of September 2025
///
/// - 2025-09-01: 09:00-18:00, 60 min break
/// - 2025-09-02: 09:00-17:00, 30 min break, 10:00-10:30 away, 60 min side job
pub fn init_db_with_data(db_path: &str) {
    rat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "--in",
            "09:00",
            "--out",
            "18:00",
            "--break",
            "60",
        ])
        .assert()
        .success();

    rat()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-02",
            "--in",
            "09:00",
            "--out",
            "17:00",
            "--break",
            "30",
            "--interrupt",
            "10:00-10:30",
            "--side-job",
            "60",
        ])
        .assert()
        .success();
}

/// Parse the stdout of a `--json` command.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().expect("run command");
    assert!(out.status.success(), "command failed: {:?}", out);
    serde_json::from_slice(&out.stdout).expect("valid JSON on stdout")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
