pub mod client;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod init;
pub mod log;
pub mod plan;
pub mod session;
pub mod template;
pub mod week;

use crate::config::Config;
use crate::core::try_build_week;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{self, Write};

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// `--client` wins over `default_client` from the config.
pub(crate) fn resolve_client(client: Option<i64>, cfg: &Config) -> AppResult<i64> {
    client.or(cfg.default_client).ok_or_else(|| {
        AppError::InvalidArgument(
            "no client given: use --client <ID> or set default_client in the config".into(),
        )
    })
}

/// Reference date of a week view; the whole Monday..Sunday window around it
/// must be representable.
pub(crate) fn resolve_date(input: Option<&String>) -> AppResult<NaiveDate> {
    let Some(s) = input else {
        return Ok(date::today());
    };

    date::parse_date(s)
        .filter(|d| try_build_week(*d).is_some())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn resolve_now(input: Option<&String>) -> AppResult<NaiveDateTime> {
    match input {
        Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::now()),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
