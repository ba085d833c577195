use predicates::str::contains;

mod common;
use common::{alarms, init_db, isolated_home, rti};
use std::fs;

#[test]
fn test_dial_top_selects_twelve() {
    rti()
        .args([
            "dial", "--time", "09:00", "--meridiem", "pm", "--drag", "150,30",
        ])
        .assert()
        .success()
        .stdout(contains("12:00 PM"));
}

#[test]
fn test_dial_three_oclock() {
    rti()
        .args(["dial", "--time", "09:20", "--drag", "200,200", "270,150"])
        .assert()
        .success()
        .stdout(contains("3:20 AM"));
}

#[test]
fn test_dial_minutes() {
    rti()
        .args([
            "dial",
            "--time",
            "14:00",
            "--component",
            "minute",
            "--drag",
            "150,270",
        ])
        .assert()
        .success()
        .stdout(contains("2:30 PM"));
}

#[test]
fn test_dial_rejects_bad_points() {
    rti()
        .args(["dial", "--drag", "150"])
        .assert()
        .failure()
        .stderr(contains("Invalid dial point"));
}

#[test]
fn test_dial_save() {
    let db_path = init_db("dial_save");

    rti()
        .args([
            "--db",
            &db_path,
            "dial",
            "--time",
            "07:00",
            "--meridiem",
            "pm",
            "--drag",
            "270,150",
            "--save",
            "--label",
            "Tea",
        ])
        .assert()
        .success()
        .stdout(contains("Your alarm is set for 3:00 PM"));

    let all = alarms(&db_path);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["time"], "15:00");
    assert_eq!(all[0]["label"], "Tea");
}

#[test]
fn test_face() {
    rti()
        .args(["face"])
        .assert()
        .success()
        .stdout(contains("12"))
        .stdout(contains("150.0"))
        .stdout(contains("30.0"));

    rti()
        .args(["face", "--component", "minute"])
        .assert()
        .success()
        .stdout(contains("55"));
}

#[test]
fn test_dial_ignores_missing_user_config() {
    // No ralarm.conf under the test home: the default 150/150/120 dial applies
    assert!(!isolated_home().join(".ralarm").join("ralarm.conf").exists());
    assert!(fs::read_dir(isolated_home()).is_ok());

    rti()
        .args(["dial", "--time", "06:00", "--drag", "30,150"])
        .assert()
        .success()
        .stdout(contains("9:00 AM"));
}
