use chrono::NaiveDate;
use rpunchclock::core::reminders::{InMemorySentLog, ReminderSentLog};
use rpunchclock::db::sent_log::SqliteSentLog;
use rpunchclock::db::shared::SharedDb;
use rpunchclock::models::reminder::ReminderKind;

mod common;
use common::{TestEnv, day};

fn next_day() -> NaiveDate {
    day().succ_opt().expect("next day")
}

fn check_idempotent_and_day_scoped(log: &dyn ReminderSentLog) {
    assert!(!log.has_fired(ReminderKind::Entry, day()).expect("read"));

    log.mark_fired(ReminderKind::Entry, day()).expect("mark");
    log.mark_fired(ReminderKind::Entry, day()).expect("mark twice");

    assert!(log.has_fired(ReminderKind::Entry, day()).expect("read"));
    assert!(!log.has_fired(ReminderKind::Exit, day()).expect("read"));
    assert_eq!(log.fired_on(day()).expect("list"), vec![ReminderKind::Entry]);

    // a new day starts with nothing sent
    assert!(!log.has_fired(ReminderKind::Entry, next_day()).expect("read"));
    assert!(log.fired_on(next_day()).expect("list").is_empty());
}

#[test]
fn in_memory_log_is_idempotent_per_day() {
    check_idempotent_and_day_scoped(&InMemorySentLog::new());
}

#[test]
fn sqlite_log_is_idempotent_per_day() {
    let env = TestEnv::new();
    let db = SharedDb::open(&env.db_str()).expect("open db");
    check_idempotent_and_day_scoped(&SqliteSentLog::new(db));
}

#[test]
fn sqlite_log_survives_reopening() {
    let env = TestEnv::new();

    {
        let db = SharedDb::open(&env.db_str()).expect("open db");
        let log = SqliteSentLog::new(db);
        log.mark_fired(ReminderKind::LunchExit, day()).expect("mark");
        log.mark_fired(ReminderKind::Exit, day()).expect("mark");
    }

    let db = SharedDb::open(&env.db_str()).expect("reopen db");
    let log = SqliteSentLog::new(db);

    assert_eq!(
        log.fired_on(day()).expect("list"),
        vec![ReminderKind::LunchExit, ReminderKind::Exit]
    );
}
