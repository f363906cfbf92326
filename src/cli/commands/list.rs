use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::models::day_total::DailyTotal;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_worked};
use crate::utils::date;
use crate::utils::formatting::{describe_kind, format_duration, mins2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: l_now,
        details,
    } = cmd
    {
        let range = if *l_now {
            DateRange::single(date::today())
        } else {
            match period {
                Some(p) => date::resolve_period(p)?,
                None => date::current_month(),
            }
        };

        let pool = open_pool(cfg)?;
        let report = ReportLogic::build(&pool, range)?;

        if report.active_day_count() == 0 {
            info(format!("No punches between {} and {}", range.start, range.end));
            return Ok(());
        }

        let target_minutes = daily_target_minutes(cfg);

        header(format!("{} → {}", range.start, range.end));

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("DAY", 4),
            Column::new("PUNCHES", 7),
            Column::new("WORKED", 8),
        ]);

        for day in report.active_days() {
            let minutes = day.worked.num_minutes();
            table.add_row(vec![
                day.date.to_string(),
                date::weekday_short(day.date),
                day.punches.len().to_string(),
                format!(
                    "{}{}{}",
                    color_for_worked(minutes, target_minutes),
                    format_duration(day.worked),
                    RESET
                ),
            ]);
        }

        print!("{}", table.render());

        if *details {
            for day in report.active_days() {
                print_details(day);
            }
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        println!("{}", sep.to_string().repeat(34));
        println!(
            "Total: {}   Average: {}   Days: {}",
            format_duration(report.total),
            format_duration(report.average),
            report.active_day_count()
        );
    }
    Ok(())
}

fn print_details(day: &DailyTotal) {
    println!("\n{} ({})", day.date, date::weekday_short(day.date));
    for p in &day.punches {
        let (label, color) = describe_kind(p.kind.to_db_str());
        println!(
            "  #{:<5} {}  {}{}{}",
            p.id.unwrap_or_default(),
            p.time_str(),
            color,
            label,
            RESET
        );
    }
}

/// Configured daily target in minutes, 0 when it cannot be parsed.
pub(crate) fn daily_target_minutes(cfg: &Config) -> i64 {
    parse_hours(&cfg.daily_target)
        .map(|h| (h * 60.0).round() as i64)
        .unwrap_or(0)
}

/// Difference against the target, e.g. `+00h 30m`.
pub(crate) fn surplus_label(worked_minutes: i64, target_minutes: i64) -> String {
    mins2readable(worked_minutes - target_minutes, true, false)
}
