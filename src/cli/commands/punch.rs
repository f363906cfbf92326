use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::accumulator;
use crate::core::punch::PunchLogic;
use crate::db::queries::load_punches_by_date;
use crate::errors::AppResult;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_local_datetime;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind, at, force } = cmd {
        let kind: PunchKind = (*kind).into();
        let now = Local::now();
        let at = match at {
            Some(s) => parse_local_datetime(s)?,
            None => now,
        };

        let mut pool = open_pool(cfg)?;
        let punch = PunchLogic::record(&mut pool, kind, at, *force)?;

        if *force {
            warning("Sequence check skipped (--force).");
        }
        success(format!(
            "Recorded {} at {} {} (id {})",
            punch.kind,
            punch.date_str(),
            punch.time_str(),
            punch.id.unwrap_or_default()
        ));

        let todays = load_punches_by_date(&pool, &punch.day())?;
        let worked = if punch.day() == now.date_naive() {
            accumulator::compute_until(&todays, now)
        } else {
            accumulator::compute(&todays)
        };
        info(format!("Worked so far on {}: {}", punch.day(), format_duration(worked)));
    }

    Ok(())
}
