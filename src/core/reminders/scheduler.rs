//! Reminder scheduler: one recurring check per running settings generation.
//!
//! `start` spawns a Tokio task that checks immediately and then once per
//! interval. Every `start`/`stop` bumps a generation counter; a check whose
//! punch fetch resolves after the generation moved on is discarded, so a slow
//! fetch never fires against superseded settings. Stopping never waits for an
//! in-flight check.

use super::notifier::Notifier;
use super::rules;
use super::sent_log::ReminderSentLog;
use crate::core::clock::{Clock, SystemClock};
use crate::core::source::PunchSource;
use crate::models::reminder::{ReminderKind, ReminderSettings};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// What a single check did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Reminders delivered during this check (possibly none).
    Fired(Vec<ReminderKind>),
    /// The punch fetch failed; nothing was evaluated.
    Skipped,
    /// The scheduler was stopped or restarted while the fetch was pending.
    Stale,
    /// The scheduler is not running.
    Stopped,
}

struct ReminderEngine {
    source: Arc<dyn PunchSource>,
    sent_log: Arc<dyn ReminderSentLog>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    generation: AtomicU64,
}

impl ReminderEngine {
    fn is_current(&self, generation: Option<u64>) -> bool {
        generation.is_none_or(|g| self.generation.load(Ordering::SeqCst) == g)
    }

    /// One reminder check. `generation = None` runs unconditionally.
    async fn check(&self, settings: &ReminderSettings, generation: Option<u64>) -> TickOutcome {
        let now = self.clock.now();
        let today = now.date_naive();

        let punches = match self.source.fetch_day(today).await {
            Ok(p) => p,
            Err(e) => {
                warn!(day = %today, error = %e, "punch fetch failed, skipping reminder check");
                return TickOutcome::Skipped;
            }
        };

        if !self.is_current(generation) {
            debug!(day = %today, ?generation, "discarding stale reminder check");
            return TickOutcome::Stale;
        }

        let mut fired = Vec::new();

        for kind in rules::due_reminders(now, &punches, settings) {
            match self.sent_log.has_fired(kind, today) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    warn!(%kind, day = %today, error = %e, "cannot read reminder log, retrying next check");
                    continue;
                }
            }

            self.notifier.notify(kind.title(), kind.body());
            info!(%kind, day = %today, "reminder fired");

            if let Err(e) = self.sent_log.mark_fired(kind, today) {
                warn!(%kind, day = %today, error = %e, "failed to persist reminder marker");
            }
            fired.push(kind);
        }

        TickOutcome::Fired(fired)
    }
}

enum SchedulerState {
    Stopped,
    Running {
        generation: u64,
        settings: ReminderSettings,
        shutdown: watch::Sender<()>,
        task: JoinHandle<()>,
    },
}

pub struct ReminderScheduler {
    engine: Arc<ReminderEngine>,
    state: SchedulerState,
}

impl ReminderScheduler {
    pub fn new(
        source: Arc<dyn PunchSource>,
        sent_log: Arc<dyn ReminderSentLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_clock(source, sent_log, notifier, Arc::new(SystemClock))
    }

    pub fn with_clock(
        source: Arc<dyn PunchSource>,
        sent_log: Arc<dyn ReminderSentLog>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engine: Arc::new(ReminderEngine {
                source,
                sent_log,
                notifier,
                clock,
                generation: AtomicU64::new(0),
            }),
            state: SchedulerState::Stopped,
        }
    }

    /// True while a loop is armed and its task is still alive.
    pub fn is_running(&self) -> bool {
        match &self.state {
            SchedulerState::Running { task, .. } => !task.is_finished(),
            SchedulerState::Stopped => false,
        }
    }

    pub fn current_settings(&self) -> Option<&ReminderSettings> {
        match &self.state {
            SchedulerState::Running { settings, .. } => Some(settings),
            SchedulerState::Stopped => None,
        }
    }

    /// Cancel any running loop, then arm a new one for `settings` unless reminders
    /// are disabled. The first check runs right away.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self, settings: ReminderSettings) {
        self.stop();

        if !settings.enabled {
            info!("reminders disabled, scheduler stays stopped");
            return;
        }

        let generation = self.engine.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let interval_minutes = settings.effective_interval_minutes();
        let (shutdown, shutdown_rx) = watch::channel(());

        let task = tokio::spawn(run_loop(
            Arc::clone(&self.engine),
            settings.clone(),
            generation,
            shutdown_rx,
        ));

        info!(generation, interval_minutes, "reminder scheduler started");

        self.state = SchedulerState::Running {
            generation,
            settings,
            shutdown,
            task,
        };
    }

    /// Cancel the running loop. No-op when already stopped.
    pub fn stop(&mut self) {
        let previous = std::mem::replace(&mut self.state, SchedulerState::Stopped);

        if let SchedulerState::Running {
            generation,
            shutdown,
            ..
        } = previous
        {
            self.engine.generation.fetch_add(1, Ordering::SeqCst);
            let _ = shutdown.send(());
            info!(generation, "reminder scheduler stopped");
        }
    }

    pub fn restart(&mut self, settings: ReminderSettings) {
        self.stop();
        self.start(settings);
    }

    /// Run a check now against the running settings.
    pub async fn tick(&self) -> TickOutcome {
        match &self.state {
            SchedulerState::Running {
                generation,
                settings,
                ..
            } => self.engine.check(settings, Some(*generation)).await,
            SchedulerState::Stopped => TickOutcome::Stopped,
        }
    }

    /// Run a single check with `settings` without arming a timer.
    pub async fn check_once(&self, settings: &ReminderSettings) -> TickOutcome {
        if !settings.enabled {
            return TickOutcome::Fired(Vec::new());
        }
        self.engine.check(settings, None).await
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_loop(
    engine: Arc<ReminderEngine>,
    settings: ReminderSettings,
    generation: u64,
    mut shutdown: watch::Receiver<()>,
) {
    let period = Duration::from_secs(settings.effective_interval_minutes().saturating_mul(60));
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = interval.tick() => {}
        }

        if !engine.is_current(Some(generation)) {
            break;
        }

        let outcome = engine.check(&settings, Some(generation)).await;
        debug!(generation, ?outcome, "reminder check finished");
    }

    debug!(generation, "reminder loop exited");
}
