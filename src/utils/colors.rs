/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Worked-time color against a daily target:
/// at or above → green, below → yellow, nothing worked → grey.
pub fn color_for_worked(worked_minutes: i64, target_minutes: i64) -> &'static str {
    if worked_minutes <= 0 {
        GREY
    } else if target_minutes > 0 && worked_minutes >= target_minutes {
        GREEN
    } else {
        YELLOW
    }
}

/// Surplus in green, deficit in red.
pub fn color_for_diff(diff_minutes: i64) -> &'static str {
    match diff_minutes {
        d if d > 0 => GREEN,
        d if d < 0 => RED,
        _ => RESET,
    }
}

pub fn colorize_optional(value: &str) -> String {
    if is_placeholder(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--:--" || v == "00h 00m"
}
