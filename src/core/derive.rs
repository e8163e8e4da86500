//! Weekly status derivation.
//!
//! Turns the raw session rows of one week into seven [`DayEntry`] values and
//! the matching [`WeeklyStats`]. Everything here is a pure function of its
//! inputs: the evaluation moment is passed in as `now`.

use crate::core::sources::TemplateLookup;
use crate::core::week::validate_week;
use crate::errors::AppResult;
use crate::models::day_entry::{DayEntry, DayStatus};
use crate::models::session::SessionRecord;
use crate::models::session_status::SessionStatus;
use crate::models::template::{CUSTOM_SESSION_NAME, TemplateRef};
use crate::models::weekly_stats::WeeklyStats;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde::Serialize;

/// Seven day entries plus their aggregate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekView {
    pub days: Vec<DayEntry>,
    pub stats: WeeklyStats,
}

pub fn derive_week(
    week: &[NaiveDate],
    sessions: &[SessionRecord],
    now: NaiveDateTime,
    templates: &dyn TemplateLookup,
) -> AppResult<WeekView> {
    validate_week(week)?;

    let days: Vec<DayEntry> = week
        .iter()
        .map(|date| match session_for_date(sessions, *date) {
            Some(session) => day_from_session(*date, session, now, templates),
            None => DayEntry::rest(*date),
        })
        .collect();

    let stats = WeeklyStats::from_days(&days);

    debug!(
        "derived week {}..{}: {} workouts, {} completed",
        week[0],
        week[week.len() - 1],
        stats.total_workouts,
        stats.completed_workouts
    );

    Ok(WeekView { days, stats })
}

/// Pick the session of a date.
///
/// More than one row per date is a data problem: it is logged and the
/// earliest row by `created_at` wins. Rows without a timestamp sort after
/// stamped ones, and input order breaks any remaining tie.
fn session_for_date(sessions: &[SessionRecord], date: NaiveDate) -> Option<&SessionRecord> {
    let matching: Vec<(usize, &SessionRecord)> = sessions
        .iter()
        .enumerate()
        .filter(|(_, s)| s.date == date)
        .collect();

    if matching.len() > 1 {
        let ids: Vec<String> = matching.iter().map(|(_, s)| s.id.to_string()).collect();
        warn!(
            "{} sessions scheduled on {} (ids: {}), using the earliest one",
            matching.len(),
            date,
            ids.join(", ")
        );
    }

    matching
        .into_iter()
        .min_by_key(|(idx, s)| (s.created_at.is_none(), s.created_at, *idx))
        .map(|(_, s)| s)
}

fn day_from_session(
    date: NaiveDate,
    session: &SessionRecord,
    now: NaiveDateTime,
    templates: &dyn TemplateLookup,
) -> DayEntry {
    DayEntry {
        template: Some(template_for(session, templates)),
        status: resolve_status(session, now),
        session_id: Some(session.id),
        scheduled_time: session.time,
        duration_minutes: session.duration_minutes,
        notes: session.notes.clone(),
        ..DayEntry::rest(date)
    }
}

/// Stored status first; a `scheduled` row whose start is already behind
/// `now` becomes missed.
pub fn resolve_status(session: &SessionRecord, now: NaiveDateTime) -> DayStatus {
    match session.status {
        SessionStatus::Completed => DayStatus::Completed,
        SessionStatus::NoShow => DayStatus::Missed,
        SessionStatus::Cancelled => DayStatus::Cancelled,
        SessionStatus::Scheduled if session.starts_at() < now => DayStatus::Missed,
        SessionStatus::Scheduled => DayStatus::Scheduled,
    }
}

fn template_for(session: &SessionRecord, templates: &dyn TemplateLookup) -> TemplateRef {
    if let Some(template_id) = session.template_id {
        if let Some(name) = session
            .template_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
        {
            return TemplateRef {
                id: template_id,
                name: name.to_string(),
            };
        }

        if let Some(found) = templates.resolve_template(template_id) {
            return found;
        }

        debug!(
            "template {} of session {} could not be resolved",
            template_id, session.id
        );
    }

    fallback_template(session)
}

fn fallback_template(session: &SessionRecord) -> TemplateRef {
    let name = session
        .session_type
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(CUSTOM_SESSION_NAME);

    TemplateRef {
        id: session.id,
        name: name.to_string(),
    }
}
