use super::open_pool;
use crate::cli::parser::{Commands, TemplateAction};
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::templates::{delete_template, insert_template, load_templates};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { action } = cmd {
        let pool = open_pool(cfg)?;

        match action {
            TemplateAction::Add { name, session_type } => {
                let id = insert_template(&pool.conn, name, session_type.as_deref())?;
                audit_quiet(
                    &pool.conn,
                    "template_add",
                    &format!("template #{id}"),
                    &format!("Added template '{}'", name.trim()),
                );
                success(format!("Template #{} '{}' added.", id, name.trim()));
            }
            TemplateAction::List => {
                let templates = load_templates(&pool.conn)?;
                if templates.is_empty() {
                    info("No templates yet.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::right("ID"),
                    Column::left("Name"),
                    Column::left("Type"),
                ]);
                for t in templates {
                    let kind = t.session_type.unwrap_or_else(|| "--".into());
                    table.add_row(vec![t.id.to_string(), t.name, colorize_optional(&kind)]);
                }
                print!("{}", table.render());
            }
            TemplateAction::Del { id } => {
                delete_template(&pool.conn, *id)?;
                audit_quiet(
                    &pool.conn,
                    "template_del",
                    &format!("template #{id}"),
                    "Deleted template",
                );
                success(format!("Template #{} deleted.", id));
            }
        }
    }

    Ok(())
}
