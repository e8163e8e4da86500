//! Session queries: the data-access side of the weekly calendar.

use crate::core::sources::SessionSource;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::models::session_status::SessionStatus;
use crate::utils::date::{format_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SESSION_COLUMNS: &str = "id, client_id, date, time, status, template_id, template_name, \
     session_type, duration_minutes, notes, created_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<SessionRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let time = match row.get::<_, Option<String>>("time")? {
        Some(t) if !t.trim().is_empty() => Some(
            crate::utils::time::parse_time(&t)
                .ok_or_else(|| conversion_error(AppError::InvalidTime(t.clone())))?,
        ),
        _ => None,
    };

    let status_str: String = row.get("status")?;
    let status = SessionStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(AppError::InvalidStatus(status_str.clone())))?;

    // created_at only orders duplicates: a malformed stamp is not fatal.
    let created_at = row
        .get::<_, Option<String>>("created_at")?
        .and_then(|s| parse_timestamp(&s));

    Ok(SessionRecord {
        id: row.get("id")?,
        client_id: row.get("client_id")?,
        date,
        time,
        status,
        template_id: row.get("template_id")?,
        template_name: row.get("template_name")?,
        session_type: row.get("session_type")?,
        duration_minutes: row.get("duration_minutes")?,
        notes: row.get("notes")?,
        created_at,
    })
}

fn time_to_db(time: Option<NaiveTime>) -> Option<String> {
    time.map(|t| t.format("%H:%M:%S").to_string())
}

/// Sessions of a client scheduled between `start` and `end` (inclusive),
/// oldest row first.
pub fn load_sessions_between(
    conn: &Connection,
    client_id: i64,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<SessionRecord>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM sessions
         WHERE client_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY created_at ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![
            client_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<SessionRecord> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = ?1");
    conn.query_row(&sql, [id], map_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Session #{id}")))
}

/// Insert a session and return its new id.
pub fn insert_session(conn: &Connection, s: &SessionRecord) -> AppResult<i64> {
    let created_at = s
        .created_at
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    conn.execute(
        "INSERT INTO sessions (client_id, date, time, status, template_id, template_name,
                               session_type, duration_minutes, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            s.client_id,
            s.date_str(),
            time_to_db(s.time),
            s.status.to_db_str(),
            s.template_id,
            s.template_name,
            s.session_type,
            s.duration_minutes,
            s.notes,
            format_timestamp(&created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the status tag; `duration` is written only when given.
pub fn update_session_status(
    conn: &Connection,
    id: i64,
    status: SessionStatus,
    duration: Option<i64>,
) -> AppResult<()> {
    let changed = match duration {
        Some(mins) => conn.execute(
            "UPDATE sessions SET status = ?1, duration_minutes = ?2 WHERE id = ?3",
            params![status.to_db_str(), mins, id],
        )?,
        None => conn.execute(
            "UPDATE sessions SET status = ?1 WHERE id = ?2",
            params![status.to_db_str(), id],
        )?,
    };

    if changed == 0 {
        return Err(AppError::NotFound(format!("Session #{id}")));
    }
    Ok(())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Session #{id}")));
    }
    Ok(())
}

/// Number of sessions the client already has on `date`.
pub fn count_sessions_on(conn: &Connection, client_id: i64, date: &NaiveDate) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE client_id = ?1 AND date = ?2",
        params![client_id, date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

impl SessionSource for DbPool {
    fn fetch_sessions(
        &self,
        client_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SessionRecord>> {
        load_sessions_between(&self.conn, client_id, &start, &end)
    }
}
