#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use coachweek::models::session::SessionRecord;
use coachweek::models::session_status::SessionStatus;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointing at a private temp dir so no real
/// config file is read or written.
pub fn cw() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("coachweek_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("coachweek");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_coachweek.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and add one client ("Alice", id 1)
pub fn init_db_with_client(db_path: &str) {
    cw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    cw().args(["--db", db_path, "client", "add", "Alice"])
        .assert()
        .success();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).expect("valid time"))
}

/// A bare session row for the derivation tests.
pub fn session(id: i64, on: NaiveDate, status: SessionStatus) -> SessionRecord {
    SessionRecord {
        id,
        client_id: 1,
        date: on,
        time: None,
        status,
        template_id: None,
        template_name: None,
        session_type: None,
        duration_minutes: None,
        notes: None,
        created_at: None,
    }
}
