use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::store::{SettingsStore, YamlSettingsStore};
use crate::core::reminders::{ConsoleNotifier, ReminderScheduler, TickOutcome};
use crate::db::punch_source::SqlitePunchSource;
use crate::db::sent_log::SqliteSentLog;
use crate::db::shared::SharedDb;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// How often the foreground runner re-reads the reminder settings.
const SETTINGS_RELOAD: Duration = Duration::from_secs(30);

pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Remind { once } = cmd {
        let db = SharedDb::open(&cfg.database_path().to_string_lossy())?;
        let store = YamlSettingsStore::new(config_path);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(run(db, store, *once))?;
    }

    Ok(())
}

async fn run(db: SharedDb, store: YamlSettingsStore, once: bool) -> AppResult<()> {
    let mut scheduler = ReminderScheduler::new(
        Arc::new(SqlitePunchSource::new(db.clone())),
        Arc::new(SqliteSentLog::new(db)),
        Arc::new(ConsoleNotifier),
    );

    let mut active = store.load()?;

    if once {
        match scheduler.check_once(&active).await {
            TickOutcome::Fired(kinds) if kinds.is_empty() => info("No reminders due."),
            TickOutcome::Fired(kinds) => debug!(count = kinds.len(), "reminders fired"),
            TickOutcome::Skipped => warning("Could not read today's punches."),
            TickOutcome::Stale | TickOutcome::Stopped => {}
        }
        return Ok(());
    }

    if !active.enabled {
        warning("Reminders are disabled; waiting for them to be enabled (Ctrl-C to quit).");
    } else {
        info(format!(
            "Reminders running every {} min (Ctrl-C to quit).",
            active.effective_interval_minutes()
        ));
    }
    scheduler.start(active.clone());

    let mut reload = tokio::time::interval(SETTINGS_RELOAD);
    reload.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = reload.tick() => {
                match store.load() {
                    Ok(latest) if latest != active => {
                        info("Reminder settings changed, restarting scheduler.");
                        scheduler.restart(latest.clone());
                        active = latest;
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "failed to reload reminder settings"),
                }
            }
        }
    }

    scheduler.stop();
    info("Reminders stopped.");
    Ok(())
}
