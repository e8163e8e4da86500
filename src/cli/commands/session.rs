use super::{ask_confirmation, open_pool, resolve_client};
use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::session::{NewSession, SessionLogic};
use crate::db::queries::load_sessions_between;
use crate::errors::{AppError, AppResult};
use crate::models::session_status::SessionStatus;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_time_short, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Session { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        SessionAction::Add {
            date: date_str,
            client,
            time,
            template,
            name,
            session_type,
            notes,
        } => {
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

            let input = NewSession {
                client_id: resolve_client(*client, cfg)?,
                date: Some(d),
                time: parse_optional_time(time.as_ref())?,
                template_id: *template,
                template_name: name.clone(),
                session_type: session_type.clone(),
                notes: notes.clone(),
            };

            let id = SessionLogic::add(&mut pool, input)?;
            success(format!("Session #{} scheduled on {}.", id, d));
        }

        SessionAction::Complete { id, duration } => {
            SessionLogic::complete(&mut pool, *id, *duration)?;
            success(format!("Session #{} marked as completed.", id));
        }

        SessionAction::Status { id, status } => {
            let st = SessionStatus::from_input(status)
                .ok_or_else(|| AppError::InvalidStatus(status.to_string()))?;
            SessionLogic::set_status(&mut pool, *id, st)?;
            success(format!("Session #{} is now {}.", id, st.to_db_str()));
        }

        SessionAction::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete session #{}? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = SessionLogic::delete(&mut pool, *id)?;
            success(format!(
                "Session #{} on {} has been deleted.",
                id,
                removed.date_str()
            ));
        }

        SessionAction::List { client, period } => {
            let client_id = resolve_client(*client, cfg)?;
            let (start, end) = match period {
                Some(p) => date::period_bounds(p)?,
                None => date::current_month_bounds()?,
            };

            let sessions = load_sessions_between(&pool.conn, client_id, &start, &end)?;
            if sessions.is_empty() {
                info(format!("No sessions between {} and {}.", start, end));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Date"),
                Column::left("Time"),
                Column::left("Status"),
                Column::right("Template"),
                Column::left("Type"),
                Column::right("Min"),
                Column::left("Notes"),
            ]);

            let mut sorted = sessions;
            sorted.sort_by_key(|s| (s.date, s.time, s.id));

            for s in sorted {
                table.add_row(vec![
                    s.id.to_string(),
                    s.date_str(),
                    colorize_optional(&format_time_short(s.time)),
                    s.status.to_db_str().to_string(),
                    colorize_optional(&s.template_id.map(|t| t.to_string()).unwrap_or("--".into())),
                    s.session_type.unwrap_or_default(),
                    colorize_optional(
                        &s.duration_minutes
                            .map(|m| m.to_string())
                            .unwrap_or("--".into()),
                    ),
                    s.notes.unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
