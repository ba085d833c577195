use predicates::str::contains;

mod common;
use common::{add_alarm, alarms, init_db, rti, short_id};

#[test]
fn test_add_and_list() {
    let db_path = init_db("add_and_list");

    add_alarm(&db_path, &["14:05", "--label", "Meeting"]);
    add_alarm(&db_path, &["06:30", "--label", "Run", "--days", "Mon, Wed"]);

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("14:05"))
        .stdout(contains("Meeting"))
        .stdout(contains("06:30"))
        .stdout(contains("Mon, Wed"));

    let all = alarms(&db_path);
    assert_eq!(all.len(), 2);
    // Ordered by time of day
    assert_eq!(all[0]["time"], "06:30");
    assert_eq!(all[1]["time"], "14:05");
    assert_eq!(all[1]["active"], true);
}

#[test]
fn test_add_defaults() {
    let db_path = init_db("add_defaults");

    add_alarm(&db_path, &["7:00"]);
    add_alarm(&db_path, &["8:00", "--label", "   ", "--no-schedule"]);

    let all = alarms(&db_path);
    assert_eq!(all[0]["label"], "New Alarm");
    // Default schedule is a one-shot for today
    assert!(all[0]["date"].is_string());
    assert!(all[0]["days"].is_null());

    assert_eq!(all[1]["label"], "New Alarm");
    assert!(all[1]["date"].is_null());

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No Days"));
}

#[test]
fn test_add_12h_input_is_stored_as_24h() {
    let db_path = init_db("add_12h");

    add_alarm(&db_path, &["2:05 PM"]);
    add_alarm(&db_path, &["12:10 AM"]);

    let all = alarms(&db_path);
    assert_eq!(all[0]["time"], "00:10");
    assert_eq!(all[1]["time"], "14:05");
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = init_db("add_bad_input");

    rti()
        .args(["--db", &db_path, "add", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rti()
        .args(["--db", &db_path, "add", "07:00", "--date", "20/10/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rti()
        .args([
            "--db",
            &db_path,
            "add",
            "07:00",
            "--date",
            "2026-10-20",
            "--days",
            "Mon",
        ])
        .assert()
        .failure();

    assert!(alarms(&db_path).is_empty());
}

#[test]
fn test_toggle() {
    let db_path = init_db("toggle");
    add_alarm(&db_path, &["09:45"]);
    let id = short_id(&db_path, 0);

    rti()
        .args(["--db", &db_path, "toggle", &id])
        .assert()
        .success()
        .stdout(contains("is now off"));
    assert_eq!(alarms(&db_path)[0]["active"], false);

    rti()
        .args(["--db", &db_path, "toggle", &id])
        .assert()
        .success()
        .stdout(contains("is now on"));

    rti()
        .args(["--db", &db_path, "toggle", &id, "--on"])
        .assert()
        .success();
    assert_eq!(alarms(&db_path)[0]["active"], true);
}

#[test]
fn test_edit() {
    let db_path = init_db("edit");
    add_alarm(&db_path, &["07:00", "--label", "Wake"]);
    let id = short_id(&db_path, 0);

    rti()
        .args([
            "--db", &db_path, "edit", &id, "--time", "08:15", "--label", "Work", "--days", "Mon, Fri",
            "--off",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    let all = alarms(&db_path);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["time"], "08:15");
    assert_eq!(all[0]["label"], "Work");
    assert_eq!(all[0]["days"], "Mon, Fri");
    assert!(all[0]["date"].is_null());
    assert_eq!(all[0]["active"], false);
}

#[test]
fn test_unknown_id() {
    let db_path = init_db("unknown_id");

    rti()
        .args(["--db", &db_path, "toggle", "deadbeef"])
        .assert()
        .failure()
        .stderr(contains("No alarm found"));

    rti()
        .args(["--db", &db_path, "del", "deadbeef"])
        .assert()
        .failure()
        .stderr(contains("No alarm found"));
}

#[test]
fn test_delete_one() {
    let db_path = init_db("delete_one");
    add_alarm(&db_path, &["05:00"]);
    add_alarm(&db_path, &["06:00"]);
    let id = short_id(&db_path, 0);

    rti()
        .args(["--db", &db_path, "del", &id])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let all = alarms(&db_path);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["time"], "06:00");
}

#[test]
fn test_delete_all() {
    let db_path = init_db("delete_all");

    // Empty store: nothing to remove, still a success
    rti()
        .args(["--db", &db_path, "del", "--all", "--force"])
        .assert()
        .success()
        .stdout(contains("0 alarm(s) deleted"));

    add_alarm(&db_path, &["05:00"]);
    add_alarm(&db_path, &["06:00"]);

    rti()
        .args(["--db", &db_path, "del", "--all"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Delete all alarms?"))
        .stdout(contains("Operation cancelled"));
    assert_eq!(alarms(&db_path).len(), 2);

    rti()
        .args(["--db", &db_path, "del", "--all"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("2 alarm(s) deleted"));
    assert!(alarms(&db_path).is_empty());
}

#[test]
fn test_list_empty() {
    let db_path = init_db("list_empty");

    rti()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No alarms yet"));
}

#[test]
fn test_log_print() {
    let db_path = init_db("log_print");
    add_alarm(&db_path, &["10:00", "--label", "Standup"]);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = init_db("db_info");
    add_alarm(&db_path, &["10:00", "--days", "Mon"]);

    rti()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Alarms:"))
        .stdout(contains("Recurring alarms:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_wildcard_ids_are_rejected() {
    let db_path = init_db("wildcard_ids");
    add_alarm(&db_path, &["07:00"]);

    for token in ["____", "%%%%"] {
        rti()
            .args(["--db", &db_path, "del", token])
            .assert()
            .failure()
            .stderr(contains("No alarm found"));
    }

    assert_eq!(alarms(&db_path).len(), 1);
}
