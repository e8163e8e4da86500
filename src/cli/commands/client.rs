use super::open_pool;
use crate::cli::parser::{ClientAction, Commands};
use crate::config::Config;
use crate::db::clients::{insert_client, load_clients};
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client { action } = cmd {
        let pool = open_pool(cfg)?;

        match action {
            ClientAction::Add { name } => {
                let id = insert_client(&pool.conn, name)?;
                audit_quiet(
                    &pool.conn,
                    "client_add",
                    &format!("client #{id}"),
                    &format!("Added client '{}'", name.trim()),
                );
                success(format!("Client #{} '{}' added.", id, name.trim()));
            }
            ClientAction::List => {
                let clients = load_clients(&pool.conn)?;
                if clients.is_empty() {
                    info("No clients yet. Add one with `coachweek client add <NAME>`.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("ID"), Column::left("Name")]);
                for c in clients {
                    table.add_row(vec![c.id.to_string(), c.name]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
