use chrono::NaiveTime;
use rpunchclock::config::Config;
use rpunchclock::config::store::{InMemorySettingsStore, SettingsStore, YamlSettingsStore};
use rpunchclock::models::date_range::WeekStart;
use rpunchclock::models::reminder::ReminderSettings;
use rpunchclock::utils::time::{parse_hours, parse_reminder_time};
use std::fs;

mod common;
use common::TestEnv;

fn hm(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

#[test]
fn defaults_when_nothing_was_saved() {
    let env = TestEnv::new();
    let settings = YamlSettingsStore::new(&env.config).load().expect("load");

    assert!(settings.enabled);
    assert_eq!(settings.entry_reminder_time, hm(9, 0));
    assert_eq!(settings.lunch_exit_reminder_time, hm(12, 0));
    assert_eq!(settings.afternoon_entry_reminder_time, hm(13, 0));
    assert_eq!(settings.exit_reminder_hours, 8.0);
    assert_eq!(settings.check_interval_minutes, 5);

    assert_eq!(InMemorySettingsStore::new().load().expect("load"), settings);
}

#[test]
fn saved_settings_round_trip_through_the_config_file() {
    let env = TestEnv::new();
    let store = YamlSettingsStore::new(&env.config);
    let settings = ReminderSettings {
        enabled: false,
        entry_reminder_time: hm(8, 30),
        lunch_exit_reminder_time: None,
        exit_reminder_hours: 7.5,
        check_interval_minutes: 15,
        ..Default::default()
    };

    store.save(&settings).expect("save");

    assert_eq!(store.load().expect("load"), settings);
    let raw = fs::read_to_string(&env.config).expect("read config");
    assert!(raw.contains("08:30"));
    assert!(raw.contains("lunch_exit_reminder_time: null"));
}

#[test]
fn saving_reminders_keeps_other_sections() {
    let env = TestEnv::new();
    let cfg = Config {
        separator_char: "=".into(),
        week_start: WeekStart::Monday,
        ..Default::default()
    };
    cfg.save_to(&env.config).expect("save config");

    let store = YamlSettingsStore::new(&env.config);
    store
        .save(&ReminderSettings {
            check_interval_minutes: 2,
            ..Default::default()
        })
        .expect("save reminders");

    let reloaded = Config::load_from(&env.config).expect("reload");
    assert_eq!(reloaded.separator_char, "=");
    assert_eq!(reloaded.week_start, WeekStart::Monday);
    assert_eq!(reloaded.reminders.check_interval_minutes, 2);
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let env = TestEnv::new();
    fs::write(
        &env.config,
        "reminders:\n  entry_reminder_time: \"07:45\"\n  afternoon_entry_reminder_time: null\n",
    )
    .expect("write config");

    let cfg = Config::load_from(&env.config).expect("load");

    assert_eq!(cfg.week_start, WeekStart::Sunday);
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.reminders.entry_reminder_time, hm(7, 45));
    assert_eq!(cfg.reminders.afternoon_entry_reminder_time, None);
    assert_eq!(cfg.reminders.lunch_exit_reminder_time, hm(12, 0));
}

#[test]
fn malformed_config_is_an_error() {
    let env = TestEnv::new();
    fs::write(&env.config, "reminders:\n  entry_reminder_time: \"25:99\"\n").expect("write");

    assert!(Config::load_from(&env.config).is_err());
    assert!(YamlSettingsStore::new(&env.config).load().is_err());
}

#[test]
fn in_memory_store_replaces_settings_wholesale() {
    let store = InMemorySettingsStore::new();
    let settings = ReminderSettings {
        entry_reminder_time: None,
        ..Default::default()
    };

    store.save(&settings).expect("save");
    assert_eq!(store.load().expect("load"), settings);
}

#[test]
fn interval_is_clamped_to_one_minute() {
    for minutes in [i64::MIN, -5, 0, 1] {
        let s = ReminderSettings {
            check_interval_minutes: minutes,
            ..Default::default()
        };
        assert_eq!(s.effective_interval_minutes(), 1);
    }
}

#[test]
fn interval_is_capped_at_one_day() {
    for minutes in [ReminderSettings::MAX_CHECK_INTERVAL_MINUTES, 10_000, i64::MAX] {
        let s = ReminderSettings {
            check_interval_minutes: minutes,
            ..Default::default()
        };
        assert_eq!(s.effective_interval_minutes(), 24 * 60);
    }
}

#[test]
fn exit_threshold_follows_the_configured_hours() {
    let s = ReminderSettings {
        exit_reminder_hours: 7.5,
        ..Default::default()
    };
    assert_eq!(s.exit_threshold(), Some(chrono::Duration::minutes(450)));

    let off = ReminderSettings {
        exit_reminder_hours: 0.0,
        ..Default::default()
    };
    assert_eq!(off.exit_threshold(), None);

    for hours in [24.5, 1e13, f64::MAX, f64::INFINITY, f64::NAN] {
        let beyond = ReminderSettings {
            exit_reminder_hours: hours,
            ..Default::default()
        };
        assert_eq!(beyond.exit_threshold(), None);
    }

    let full_day = ReminderSettings {
        exit_reminder_hours: 24.0,
        ..Default::default()
    };
    assert_eq!(full_day.exit_threshold(), Some(chrono::Duration::hours(24)));
}

#[test]
fn hours_and_reminder_times_parse_from_cli_input() {
    assert_eq!(parse_hours("8").expect("plain"), 8.0);
    assert_eq!(parse_hours("7.5").expect("decimal"), 7.5);
    assert_eq!(parse_hours("7h30m").expect("h+m"), 7.5);
    assert_eq!(parse_hours("90m").expect("minutes"), 1.5);
    assert!(parse_hours("soon").is_err());
    assert!(parse_hours("-1").is_err());
    assert_eq!(parse_hours("24").expect("one day"), 24.0);
    assert!(parse_hours("25").is_err());
    assert!(parse_hours("1e13").is_err());
    assert!(parse_hours("25h").is_err());

    assert_eq!(parse_reminder_time("12:15").expect("time"), hm(12, 15));
    assert_eq!(parse_reminder_time("off").expect("off"), None);
    assert!(parse_reminder_time("noon").is_err());
}
