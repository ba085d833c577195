#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME / APPDATA pointing at an empty dir so a user's
/// own ralarm.conf never leaks into the tests.
pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("ralarm");
    let home = isolated_home();
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Config-free home directory shared by the tests
pub fn isolated_home() -> PathBuf {
    let home = env::temp_dir().join("ralarm_test_home");
    fs::create_dir_all(&home).ok();
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ralarm.sqlite", name));
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

/// Fresh DB with the schema in place
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Add an alarm through the CLI
pub fn add_alarm(db_path: &str, args: &[&str]) {
    rti()
        .args(["--db", db_path, "add"])
        .args(args)
        .assert()
        .success();
}

/// Alarms as returned by `list --json`
pub fn alarms(db_path: &str) -> Vec<serde_json::Value> {
    let out = rti()
        .args(["--db", db_path, "list", "--json"])
        .output()
        .expect("run list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let start = stdout.find('[').expect("json array start");
    let end = stdout.rfind(']').expect("json array end");
    serde_json::from_str(&stdout[start..=end]).expect("valid json")
}

/// Short id of the alarm at `index` in list order
pub fn short_id(db_path: &str, index: usize) -> String {
    let all = alarms(db_path);
    all[index]["id"].as_str().expect("id")[..8].to_string()
}
