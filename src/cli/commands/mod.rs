pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod remind;
pub mod report;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, applying pending migrations.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database_path().to_string_lossy())
}
