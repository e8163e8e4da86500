use super::{open_pool, resolve_date, resolve_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::clients::load_clients;
use crate::errors::AppResult;
use crate::ui::dashboard::{DashboardRow, render_dashboard};
use crate::ui::messages::{header, info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date, now } = cmd {
        let reference = resolve_date(date.as_ref())?;
        let now = resolve_now(now.as_ref())?;

        let pool = open_pool(cfg)?;
        let clients = load_clients(&pool.conn)?;

        if clients.is_empty() {
            info("No clients yet. Add one with `coachweek client add <NAME>`.");
            return Ok(());
        }

        let mut rows = Vec::with_capacity(clients.len());
        for client in &clients {
            let load = Core::load_week(&pool, &pool, client.id, reference, now)?;
            if let Some(e) = &load.fetch_error {
                warning(format!("{}: sessions could not be loaded: {e}", client.name));
            }
            rows.push(DashboardRow { client, load });
        }

        if let Some(first) = rows.first() {
            println!(
                "{}",
                header(
                    format!(
                        "📊 Dashboard · week {} → {}",
                        first.load.week_start, first.load.week_end
                    ),
                    &cfg.separator_char
                )
            );
        }
        print!("{}", render_dashboard(&rows));
    }

    Ok(())
}
