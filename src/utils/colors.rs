//! ANSI color helper utilities for terminal output.

use crate::models::day_entry::DayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Completed => GREEN,
        DayStatus::Missed => RED,
        DayStatus::Scheduled => BLUE,
        DayStatus::Cancelled => MAGENTA,
        DayStatus::Rest => GREY,
    }
}

/// Completion rate color:
/// ≥ 80 → green
/// ≥ 50 → yellow
/// otherwise red, and grey when there was nothing to do.
pub fn color_for_rate(rate: i64, total: u32) -> &'static str {
    if total == 0 {
        GREY
    } else if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

/// Wrap `value` in grey when it is a placeholder ("", "--", "--:--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
