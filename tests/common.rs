#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rpunchclock::core::clock::Clock;
use rpunchclock::core::source::PunchSource;
use rpunchclock::errors::{AppError, AppResult};
use rpunchclock::models::date_range::DateRange;
use rpunchclock::models::punch::PunchEvent;
use rpunchclock::models::punch_kind::PunchKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::Semaphore;

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpunchclock")
}

/// Throwaway database + config file, removed when dropped.
pub struct TestEnv {
    _dir: TempDir,
    pub db: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("punches.sqlite");
        let config = dir.path().join("rpunchclock.conf");
        Self {
            _dir: dir,
            db,
            config,
        }
    }

    pub fn db_str(&self) -> String {
        self.db.to_string_lossy().to_string()
    }

    /// Binary invocation bound to this environment's database and config.
    pub fn cmd(&self) -> Command {
        let mut cmd = rpc();
        cmd.arg("--db")
            .arg(&self.db)
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    pub fn punch(&self, kind: &str, at: &str) {
        self.cmd()
            .args(["punch", kind, "--at", at])
            .assert()
            .success();
    }
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

pub fn at_on(d: NaiveDate, h: u32, m: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&d.and_hms_opt(h, m, 0).expect("valid time"))
        .single()
        .expect("unambiguous local time")
}

pub fn at(h: u32, m: u32) -> DateTime<Local> {
    at_on(day(), h, m)
}

pub fn punch(kind: PunchKind, h: u32, m: u32) -> PunchEvent {
    PunchEvent::new(at(h, m), kind)
}

/// Clock that only moves when told to.
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().expect("clock lock") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().expect("clock lock")
    }
}

/// In-memory punch source that counts fetches and can fail or hold them.
#[derive(Default)]
pub struct FakeSource {
    punches: Mutex<Vec<PunchEvent>>,
    fetches: AtomicUsize,
    failing: AtomicBool,
    gate: Option<Semaphore>,
}

impl FakeSource {
    pub fn new(punches: Vec<PunchEvent>) -> Arc<Self> {
        Arc::new(Self {
            punches: Mutex::new(punches),
            ..Default::default()
        })
    }

    /// Every fetch waits until `release` is called once for it.
    pub fn gated(punches: Vec<PunchEvent>) -> Arc<Self> {
        Arc::new(Self {
            punches: Mutex::new(punches),
            gate: Some(Semaphore::new(0)),
            ..Default::default()
        })
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_punches(&self, punches: Vec<PunchEvent>) {
        *self.punches.lock().expect("punches lock") = punches;
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PunchSource for FakeSource {
    async fn fetch_punches(&self, range: DateRange) -> AppResult<Vec<PunchEvent>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| AppError::PunchSource(e.to_string()))?
                .forget();
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::PunchSource("backend unreachable".into()));
        }

        let punches = self.punches.lock().expect("punches lock");
        Ok(punches
            .iter()
            .filter(|p| range.contains(p.day()))
            .cloned()
            .collect())
    }
}
