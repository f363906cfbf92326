use crate::cli::parser::{Commands, Toggle};
use crate::config::Config;
use crate::config::store::{SettingsStore, YamlSettingsStore};
use crate::errors::{AppError, AppResult};
use crate::models::reminder::ReminderSettings;
use crate::ui::messages::{error, success, warning};
use crate::utils::time::{parse_hours, parse_reminder_time};

use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        reminders,
        entry_at,
        lunch_exit_at,
        afternoon_entry_at,
        exit_after,
        interval,
    } = cmd
    {
        // ---- REMINDER SETTERS ----
        let store = YamlSettingsStore::new(path);
        let mut settings = store.load()?;
        let before = settings.clone();

        if let Some(t) = reminders {
            settings.enabled = *t == Toggle::On;
        }
        if let Some(s) = entry_at {
            settings.entry_reminder_time = parse_reminder_time(s)?;
        }
        if let Some(s) = lunch_exit_at {
            settings.lunch_exit_reminder_time = parse_reminder_time(s)?;
        }
        if let Some(s) = afternoon_entry_at {
            settings.afternoon_entry_reminder_time = parse_reminder_time(s)?;
        }
        if let Some(s) = exit_after {
            settings.exit_reminder_hours = parse_hours(s)?;
        }
        if let Some(m) = interval {
            if !(0..=ReminderSettings::MAX_CHECK_INTERVAL_MINUTES).contains(m) {
                return Err(AppError::InvalidDuration(format!(
                    "{} minutes (expected 0..={})",
                    m,
                    ReminderSettings::MAX_CHECK_INTERVAL_MINUTES
                )));
            }
            settings.check_interval_minutes = *m;
        }

        if settings != before {
            store.save(&settings)?;
            success("Reminder settings updated.");
            print_reminders(&settings);
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let current = Config::load_from(path).unwrap_or_else(|_| cfg.clone());
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&current)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor.clone());
        }
    }

    Ok(())
}

fn print_reminders(s: &ReminderSettings) {
    let fmt = |t: Option<chrono::NaiveTime>| {
        t.map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "off".to_string())
    };
    println!("  enabled          : {}", s.enabled);
    println!("  entry            : {}", fmt(s.entry_reminder_time));
    println!("  lunch exit       : {}", fmt(s.lunch_exit_reminder_time));
    println!("  afternoon entry  : {}", fmt(s.afternoon_entry_reminder_time));
    println!("  exit after (h)   : {}", s.exit_reminder_hours);
    println!("  interval (min)   : {}", s.effective_interval_minutes());
}

fn edit_file(path: &Path, requested_editor: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
