//! Formatting utilities used for CLI outputs.

use crate::config::ShowWeekday;
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (not a byte length).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // es: 01:15
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 01h 15m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Weekday label in the configured style.
pub fn weekday_label(date: NaiveDate, style: ShowWeekday) -> String {
    match style {
        ShowWeekday::Short => date.format("%a").to_string().chars().take(2).collect(),
        ShowWeekday::Medium => date.format("%a").to_string(),
        ShowWeekday::Long => date.format("%A").to_string(),
    }
}
