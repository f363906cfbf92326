//! Reminder settings persistence.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::models::reminder::ReminderSettings;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait SettingsStore: Send + Sync {
    /// Current settings, or the defaults when nothing was saved yet.
    fn load(&self) -> AppResult<ReminderSettings>;

    /// Replace the stored settings as a whole.
    fn save(&self, settings: &ReminderSettings) -> AppResult<()>;
}

/// Stores reminder settings in the `reminders` section of the YAML config file,
/// leaving every other section untouched.
#[derive(Debug, Clone)]
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> AppResult<ReminderSettings> {
        Ok(Config::load_from(&self.path)?.reminders)
    }

    fn save(&self, settings: &ReminderSettings) -> AppResult<()> {
        let mut cfg = Config::load_from(&self.path)?;
        cfg.reminders = settings.clone();
        cfg.save_to(&self.path)?;
        tracing::info!(path = %self.path.display(), "reminder settings saved");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Option<ReminderSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> AppResult<ReminderSettings> {
        let guard = self
            .settings
            .lock()
            .map_err(|_| AppError::Other("settings lock poisoned".into()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, settings: &ReminderSettings) -> AppResult<()> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|_| AppError::Other("settings lock poisoned".into()))?;
        *guard = Some(settings.clone());
        Ok(())
    }
}
