//! Thread-safe handle over a single SQLite connection, shared by the
//! punch source and the reminder log inside the scheduler task.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct SharedDb {
    inner: Arc<Mutex<DbPool>>,
}

impl SharedDb {
    pub fn new(pool: DbPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open(path)?))
    }

    pub fn lock(&self) -> AppResult<MutexGuard<'_, DbPool>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Other("database handle poisoned".into()))
    }
}
