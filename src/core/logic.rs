use crate::core::derive::{WeekView, derive_week};
use crate::core::sources::{SessionSource, TemplateLookup};
use crate::core::week::try_build_week;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use serde::Serialize;

/// A derived week for one client, ready for the presentation layer.
#[derive(Debug, Serialize)]
pub struct WeekLoad {
    pub client_id: i64,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    #[serde(flatten)]
    pub view: WeekView,
    /// Set when the sessions could not be fetched; `view` is then all rest days.
    #[serde(skip)]
    pub fetch_error: Option<AppError>,
}

pub struct Core;

impl Core {
    /// Build the window around `reference`, fetch its sessions and derive
    /// the day entries. A reference too close to the edge of the supported
    /// date range gives `InvalidDate`.
    ///
    /// A failing fetch does not fail the call: the error is kept in
    /// `fetch_error` and the week is derived from an empty session set.
    pub fn load_week(
        source: &dyn SessionSource,
        templates: &dyn TemplateLookup,
        client_id: i64,
        reference: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<WeekLoad> {
        let week = try_build_week(reference).ok_or_else(|| {
            AppError::InvalidDate(format!("no complete week around {reference}"))
        })?;
        let (week_start, week_end) = (week[0], week[week.len() - 1]);

        let (sessions, fetch_error) =
            match source.fetch_sessions(client_id, week_start, week_end) {
                Ok(rows) => (rows, None),
                Err(e) => {
                    warn!(
                        "could not fetch sessions of client {} for {}..{}: {}",
                        client_id, week_start, week_end, e
                    );
                    (Vec::new(), Some(e))
                }
            };

        let view = derive_week(&week, &sessions, now, templates)?;

        Ok(WeekLoad {
            client_id,
            week_start,
            week_end,
            view,
            fetch_error,
        })
    }
}
