use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{TestEnv, rpc};

fn full_day(env: &TestEnv) {
    env.punch("in", "2025-01-15 08:00");
    env.punch("lunch-out", "2025-01-15 12:00");
    env.punch("lunch-in", "2025-01-15 13:00");
    env.punch("out", "2025-01-15 17:00");
}

#[test]
fn version_flag_prints_the_binary_name() {
    rpc()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("rpunchclock"));
}

#[test]
fn init_creates_the_database_without_touching_config_in_test_mode() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(env.db.exists());
    assert!(!env.config.exists());
}

#[test]
fn init_writes_the_config_file() {
    let env = TestEnv::new();

    env.cmd().arg("init").assert().success();

    let raw = fs::read_to_string(&env.config).expect("config written");
    assert!(raw.contains("reminders:"));
    assert!(raw.contains("check_interval_minutes: 5"));
}

#[test]
fn list_shows_worked_time_for_a_full_day() {
    let env = TestEnv::new();
    full_day(&env);

    env.cmd()
        .args(["list", "--period", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("2025-01-15").and(contains("08h 00m")));
}

#[test]
fn list_details_shows_each_punch() {
    let env = TestEnv::new();
    full_day(&env);

    env.cmd()
        .args(["list", "--period", "2025-01", "--details"])
        .assert()
        .success()
        .stdout(
            contains("Clock-in")
                .and(contains("Lunch-out"))
                .and(contains("Lunch-in"))
                .and(contains("Clock-out"))
                .and(contains("12:00:00")),
        );
}

#[test]
fn list_on_an_empty_period_says_so() {
    let env = TestEnv::new();

    env.cmd()
        .args(["list", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("No punches"));
}

#[test]
fn out_of_sequence_punch_is_rejected() {
    let env = TestEnv::new();

    env.cmd()
        .args(["punch", "lunch-in", "--at", "2025-01-15 13:00"])
        .assert()
        .failure()
        .stderr(contains("Cannot record 'lunch-in' right after 'nothing'"));

    env.cmd()
        .args(["punch", "lunch-in", "--at", "2025-01-15 13:00", "--force"])
        .assert()
        .success()
        .stdout(contains("Recorded lunch-in"));
}

#[test]
fn double_clock_out_is_rejected() {
    let env = TestEnv::new();
    env.punch("in", "2025-01-15 08:00");
    env.punch("out", "2025-01-15 17:00");

    env.cmd()
        .args(["punch", "out", "--at", "2025-01-15 17:05"])
        .assert()
        .failure()
        .stderr(contains("right after 'clock-out'"));
}

#[test]
fn invalid_timestamp_is_reported() {
    let env = TestEnv::new();

    env.cmd()
        .args(["punch", "in", "--at", "tomorrow morning"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn report_json_has_totals_and_averages() {
    let env = TestEnv::new();
    full_day(&env);
    env.punch("in", "2025-01-16 09:00");
    env.punch("out", "2025-01-16 15:00");

    env.cmd()
        .args(["report", "--scope", "week", "--date", "2025-01-15", "--json"])
        .assert()
        .success()
        .stdout(
            contains("\"start\": \"2025-01-12\"")
                .and(contains("\"end\": \"2025-01-18\""))
                .and(contains("\"total_minutes\": 840"))
                .and(contains("\"average_minutes\": 420"))
                .and(contains("\"active_days\": 2")),
        );
}

#[test]
fn report_table_for_a_month() {
    let env = TestEnv::new();
    full_day(&env);

    env.cmd()
        .args(["report", "--scope", "month", "--date", "2025-01-20"])
        .assert()
        .success()
        .stdout(contains("2025-01-31").and(contains("08h 00m")).and(contains("1 day(s)")));
}

#[test]
fn edit_and_delete_a_punch() {
    let env = TestEnv::new();
    env.punch("in", "2025-01-15 08:00");

    env.cmd()
        .args(["edit", "1", "--at", "2025-01-15 07:30"])
        .assert()
        .success()
        .stdout(contains("07:30:00"));

    env.cmd()
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Punch #1 has been deleted."));

    env.cmd()
        .args(["del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No punch found with id 1"));
}

#[test]
fn delete_without_confirmation_is_cancelled() {
    let env = TestEnv::new();
    env.punch("in", "2025-01-15 08:00");

    env.cmd()
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    env.cmd()
        .args(["list", "--period", "2025-01-15", "--details"])
        .assert()
        .success()
        .stdout(contains("Clock-in"));
}

#[test]
fn config_setters_update_the_reminders_section() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "config",
            "--entry-at",
            "off",
            "--lunch-exit-at",
            "11:45",
            "--exit-after",
            "7h30m",
            "--interval",
            "10",
        ])
        .assert()
        .success()
        .stdout(contains("Reminder settings updated."));

    let raw = fs::read_to_string(&env.config).expect("config written");
    assert!(raw.contains("entry_reminder_time: null"));
    assert!(raw.contains("11:45"));
    assert!(raw.contains("exit_reminder_hours: 7.5"));
    assert!(raw.contains("check_interval_minutes: 10"));

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("check_interval_minutes: 10"));
}

#[test]
fn config_rejects_bad_reminder_times() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--entry-at", "nine"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    assert!(!env.config.exists());
}

#[test]
fn config_rejects_out_of_range_reminder_durations() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--interval", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    env.cmd()
        .args(["config", "--exit-after", "1e13"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    assert!(!env.config.exists());

    env.cmd()
        .args(["config", "--interval", "1440", "--exit-after", "24"])
        .assert()
        .success();

    let raw = fs::read_to_string(&env.config).expect("config written");
    assert!(raw.contains("check_interval_minutes: 1440"));
}

#[test]
fn remind_once_with_reminders_disabled_fires_nothing() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--reminders", "off"])
        .assert()
        .success();

    env.cmd()
        .args(["remind", "--once"])
        .assert()
        .success()
        .stdout(contains("No reminders due."));
}

#[test]
fn log_print_shows_audited_operations() {
    let env = TestEnv::new();
    env.punch("in", "2025-01-15 08:00");

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log").and(contains("punch")).and(contains("migration_applied")));
}
