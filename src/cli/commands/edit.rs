use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_local_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, at, kind } = cmd {
        if at.is_none() && kind.is_none() {
            warning("Nothing to change: pass --at and/or --kind.");
            return Ok(());
        }

        let at = at.as_deref().map(parse_local_datetime).transpose()?;
        let kind = kind.map(Into::into);

        let mut pool = open_pool(cfg)?;
        let punch = PunchLogic::update(&mut pool, *id, at, kind)?;

        success(format!(
            "Punch #{} is now {} at {} {}",
            id,
            punch.kind,
            punch.date_str(),
            punch.time_str()
        ));
    }

    Ok(())
}
