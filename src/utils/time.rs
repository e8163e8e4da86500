//! Time utilities: parsing HH:MM[:SS], formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn format_time_short(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
