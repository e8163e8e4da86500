use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a `--now` style value: `YYYY-MM-DD HH:MM[:SS]`, the same with a
/// `T` separator, or a bare date (midnight).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    parse_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN))
}

/// Parse a stored timestamp, either our own format or RFC 3339.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FMT).to_string()
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day covered by a period string:
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
fn bounds_of(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Some((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Some((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Some((
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ));
    }

    None
}

/// Resolve a period (single period or `START:END` range) to inclusive bounds.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(format!("Invalid period: {p}"));

    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = bounds_of(a.trim()).ok_or_else(invalid)?;
        let (_, end) = bounds_of(b.trim()).ok_or_else(invalid)?;
        if end < start {
            return Err(invalid());
        }
        return Ok((start, end));
    }

    bounds_of(p).ok_or_else(invalid)
}

/// Bounds of the current month.
pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    period_bounds(&format!("{:04}-{:02}", t.year(), t.month()))
}
