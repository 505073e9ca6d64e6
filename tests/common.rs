#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rpoolboard::core::normalizer::RawRow;
use rpoolboard::models::record::WorkRecord;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Name,Pool Name,Tab,Load,Start Time,End Time,Pool Up";

/// Binary under test, isolated from the user's real config via HOME.
pub fn rpb(name: &str) -> Command {
    rpb_in(&temp_home(name))
}

/// Binary under test sharing an existing HOME (multi-step scenarios).
pub fn rpb_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpoolboard");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Config file location for a test HOME (non-Windows layout).
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".rpoolboard").join("rpoolboard.conf")
}

/// Fresh, empty HOME directory for a test.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpoolboard_home_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpoolboard_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a sheet export (header + lines) and return its path.
pub fn write_sheet(name: &str, lines: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpoolboard_{}_sheet.csv", name));
    let mut content = String::from(HEADER);
    content.push('\n');
    for l in lines {
        content.push_str(l);
        content.push('\n');
    }
    fs::write(&path, content).expect("write sheet");
    path.to_string_lossy().to_string()
}

/// Two pools opened at 09:00 and 10:00 plus one pool without a lead.
pub fn sample_sheet(name: &str) -> String {
    write_sheet(
        name,
        &[
            "Alice,North,A1,100,,,01/06/2025 09:00:00",
            "Bob,North,A1,48,01/06/2025 09:05:00,01/06/2025 09:20:00,",
            "Carol,North,A1,52,01/06/2025 09:05:00,01/06/2025 09:30:00,",
            "Dave,South,B2,100,,,01/06/2025 10:00:00",
            "Erin,South,B2,10,01/06/2025 10:00:00,01/06/2025 10:20:00,",
            "Frank,South,B2,0,,,",
            "Gina,West,C3,12,,,",
        ],
    )
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%d/%m/%Y %H:%M").expect("test timestamp")
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn row(cells: &[(&str, &str)]) -> RawRow {
    cells.iter().copied().collect()
}

pub fn lead(name: &str, pool: &str, tab: &str, load: f64, up: &str) -> WorkRecord {
    WorkRecord::new(name, pool, tab, load).with_pool_up(Some(dt(up)))
}

pub fn worker(name: &str, pool: &str, tab: &str, load: f64) -> WorkRecord {
    WorkRecord::new(name, pool, tab, load)
}

pub fn timed(name: &str, pool: &str, tab: &str, load: f64, start: &str, end: &str) -> WorkRecord {
    WorkRecord::new(name, pool, tab, load).with_times(Some(dt(start)), Some(dt(end)))
}
