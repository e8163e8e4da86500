use super::{open_pool, resolve_client, resolve_date, resolve_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::clients::load_client;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::week_view::render_week;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        client,
        date,
        now,
        json,
    } = cmd
    {
        let client_id = resolve_client(*client, cfg)?;
        let reference = resolve_date(date.as_ref())?;
        let now = resolve_now(now.as_ref())?;

        let pool = open_pool(cfg)?;
        let client = load_client(&pool.conn, client_id)?;

        let load = Core::load_week(&pool, &pool, client.id, reference, now)?;

        if let Some(e) = &load.fetch_error {
            warning(format!("Sessions could not be loaded: {e}"));
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&load)?);
        } else {
            print!("{}", render_week(&load, &client.name, cfg));
        }
    }

    Ok(())
}
