use crate::cli::commands::open_pool;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    cfg.init_all(config_path, cli.test)?;

    let db_path = cfg.database_path();

    println!("⚙️  Initializing rPunchClock…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗄️  Database   : {}", db_path.display());

    let pool = open_pool(cfg)?;

    success(format!("Database initialized at {}", db_path.display()));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rPunchClock initialization completed!");
    Ok(())
}
