use crate::db::clients::load_client;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    count_sessions_on, delete_session, insert_session, load_session, update_session_status,
};
use crate::db::templates::load_template;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::models::session_status::SessionStatus;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};

/// Input of `session add`.
#[derive(Debug, Default)]
pub struct NewSession {
    pub client_id: i64,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub template_id: Option<i64>,
    pub template_name: Option<String>,
    pub session_type: Option<String>,
    pub notes: Option<String>,
}

/// High-level business logic for the `session` commands.
pub struct SessionLogic;

impl SessionLogic {
    /// Schedule a new session and return its id.
    pub fn add(pool: &mut DbPool, input: NewSession) -> AppResult<i64> {
        let date = input
            .date
            .ok_or_else(|| AppError::InvalidArgument("a session needs a date".into()))?;

        let client = load_client(&pool.conn, input.client_id)?;

        if let Some(tid) = input.template_id
            && load_template(&pool.conn, tid)?.is_none()
        {
            return Err(AppError::NotFound(format!("Template #{tid}")));
        }

        let existing = count_sessions_on(&pool.conn, client.id, &date)?;
        if existing > 0 {
            warning(format!(
                "{} already has {} session(s) on {}; the calendar shows only the earliest one.",
                client.name, existing, date
            ));
        }

        let mut session = SessionRecord::scheduled(client.id, date, input.time);
        session.template_id = input.template_id;
        session.template_name = input.template_name.filter(|n| !n.trim().is_empty());
        session.session_type = input.session_type.filter(|t| !t.trim().is_empty());
        session.notes = input.notes.filter(|n| !n.trim().is_empty());

        let id = insert_session(&pool.conn, &session)?;

        audit_quiet(
            &pool.conn,
            "session_add",
            &format!("session #{id}"),
            &format!("Scheduled for {} on {}", client.name, date),
        );

        Ok(id)
    }

    /// Mark a session completed, optionally recording its duration.
    pub fn complete(pool: &mut DbPool, id: i64, duration: Option<i64>) -> AppResult<()> {
        if let Some(mins) = duration
            && mins < 0
        {
            return Err(AppError::InvalidArgument(format!(
                "duration cannot be negative: {mins}"
            )));
        }

        update_session_status(&pool.conn, id, SessionStatus::Completed, duration)?;

        let detail = match duration {
            Some(m) => format!("Completed ({m} min)"),
            None => "Completed".to_string(),
        };
        audit_quiet(&pool.conn, "session_status", &format!("session #{id}"), &detail);
        Ok(())
    }

    pub fn set_status(pool: &mut DbPool, id: i64, status: SessionStatus) -> AppResult<()> {
        let before = load_session(&pool.conn, id)?;
        update_session_status(&pool.conn, id, status, None)?;

        audit_quiet(
            &pool.conn,
            "session_status",
            &format!("session #{id}"),
            &format!(
                "{} → {}",
                before.status.to_db_str(),
                status.to_db_str()
            ),
        );
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<SessionRecord> {
        let session = load_session(&pool.conn, id)?;
        delete_session(&pool.conn, id)?;

        audit_quiet(
            &pool.conn,
            "session_del",
            &format!("session #{id}"),
            &format!("Deleted session on {}", session.date_str()),
        );
        Ok(session)
    }
}
