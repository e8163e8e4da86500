use crate::core::sources::TemplateLookup;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::template::{Template, TemplateRef};
use chrono::Local;
use log::warn;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_template(row: &Row) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get("id")?,
        name: row.get("name")?,
        session_type: row.get("session_type")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_template(conn: &Connection, name: &str, session_type: Option<&str>) -> AppResult<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidArgument("template name cannot be empty".into()));
    }

    conn.execute(
        "INSERT INTO templates (name, session_type, created_at) VALUES (?1, ?2, ?3)",
        params![name, session_type, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_templates(conn: &Connection) -> AppResult<Vec<Template>> {
    let mut stmt = conn
        .prepare("SELECT id, name, session_type, created_at FROM templates ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_template)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_template(conn: &Connection, id: i64) -> AppResult<Option<Template>> {
    let t = conn
        .query_row(
            "SELECT id, name, session_type, created_at FROM templates WHERE id = ?1",
            [id],
            map_template,
        )
        .optional()?;
    Ok(t)
}

pub fn delete_template(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM templates WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Template #{id}")));
    }
    Ok(())
}

impl TemplateLookup for DbPool {
    fn resolve_template(&self, template_id: i64) -> Option<TemplateRef> {
        match load_template(&self.conn, template_id) {
            Ok(t) => t.map(|t| t.to_ref()),
            Err(e) => {
                warn!("template lookup for #{template_id} failed: {e}");
                None
            }
        }
    }
}
