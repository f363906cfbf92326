use crate::core::source::PunchSource;
use crate::db::queries::load_punches_in_range;
use crate::db::shared::SharedDb;
use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::punch::PunchEvent;
use async_trait::async_trait;

/// Punch source backed by the local SQLite store.
#[derive(Clone)]
pub struct SqlitePunchSource {
    db: SharedDb,
}

impl SqlitePunchSource {
    pub fn new(db: SharedDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PunchSource for SqlitePunchSource {
    async fn fetch_punches(&self, range: DateRange) -> AppResult<Vec<PunchEvent>> {
        let pool = self.db.lock()?;
        load_punches_in_range(&pool, &range).map_err(|e| AppError::PunchSource(e.to_string()))
    }
}
