use crate::cli::commands::list::{daily_target_minutes, surplus_label};
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportView};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_diff, color_for_worked, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{bold, format_duration};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        scope,
        date: date_str,
        json,
    } = cmd
    {
        let day = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let range = scope.range_for(day, cfg.week_start);

        let pool = open_pool(cfg)?;
        let report = ReportLogic::build(&pool, range)?;

        if *json {
            let view = ReportView::from(&report);
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        let target = daily_target_minutes(cfg);

        header(format!("{:?} report {} → {}", scope, range.start, range.end));

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("DAY", 4),
            Column::new("WORKED", 8),
            Column::new("DIFF", 9),
        ]);

        for day in report.per_day.values() {
            let minutes = day.worked.num_minutes();
            let diff = if day.is_empty() {
                colorize_optional("--:--")
            } else {
                format!(
                    "{}{}{}",
                    color_for_diff(minutes - target),
                    surplus_label(minutes, target),
                    RESET
                )
            };
            table.add_row(vec![
                day.date.to_string(),
                date::weekday_short(day.date),
                format!(
                    "{}{}{}",
                    color_for_worked(minutes, target),
                    format_duration(day.worked),
                    RESET
                ),
                diff,
            ]);
        }

        print!("{}", table.render());
        println!();
        println!("{} {}", bold("Total:  "), format_duration(report.total));
        println!(
            "{} {} over {} day(s)",
            bold("Average:"),
            format_duration(report.average),
            report.active_day_count()
        );
    }

    Ok(())
}
