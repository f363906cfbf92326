use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::queries::load_punch_by_id;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = open_pool(cfg)?;

        let punch = load_punch_by_id(&pool, *id)?.ok_or(AppError::PunchNotFound(*id))?;

        let prompt = format!(
            "Delete punch #{} ({} at {} {})? This action is irreversible.",
            id,
            punch.kind,
            punch.date_str(),
            punch.time_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        PunchLogic::delete(&mut pool, *id)?;
        success(format!("Punch #{} has been deleted.", id));
    }

    Ok(())
}
