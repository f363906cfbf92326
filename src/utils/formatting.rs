//! Formatting utilities used for CLI and report outputs.

use chrono::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 08h 00m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Worked time as `HHh MMm`, truncated to whole minutes.
pub fn format_duration(d: Duration) -> String {
    mins2readable(d.num_minutes(), false, false)
}

/// Text label and ANSI color for a punch kind code.
pub fn describe_kind(code: &str) -> (String, &'static str) {
    match code {
        "clock_in" => ("Clock-in".into(), "\x1b[32m"),
        "lunch_out" => ("Lunch-out".into(), "\x1b[33m"),
        "lunch_in" => ("Lunch-in".into(), "\x1b[36m"),
        "clock_out" => ("Clock-out".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
