use super::session_status::SessionStatus;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One persisted training session (⇔ sessions table).
///
/// This is the read-only input of the weekly derivation: the deriver never
/// mutates a record, it only copies fields into day entries.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub id: i64,
    pub client_id: i64,
    pub date: NaiveDate,                   // ⇔ sessions.date (TEXT "YYYY-MM-DD")
    pub time: Option<NaiveTime>,           // ⇔ sessions.time (TEXT "HH:MM:SS", nullable)
    pub status: SessionStatus,             // ⇔ sessions.status
    pub template_id: Option<i64>,          // ⇔ sessions.template_id
    pub template_name: Option<String>,     // ⇔ sessions.template_name (nullable)
    pub session_type: Option<String>,      // ⇔ sessions.session_type
    pub duration_minutes: Option<i64>,     // ⇔ sessions.duration_minutes
    pub notes: Option<String>,             // ⇔ sessions.notes
    pub created_at: Option<NaiveDateTime>, // ⇔ sessions.created_at
}

impl SessionRecord {
    /// A freshly scheduled session as created from the CLI.
    /// `id = 0` until the row is inserted.
    pub fn scheduled(client_id: i64, date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self {
            id: 0,
            client_id,
            date,
            time,
            status: SessionStatus::Scheduled,
            template_id: None,
            template_name: None,
            session_type: None,
            duration_minutes: None,
            notes: None,
            created_at: Some(Local::now().naive_local()),
        }
    }

    /// Date and time of the session; a missing time means midnight.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
