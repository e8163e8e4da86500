use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row};

fn map_client(row: &Row) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_client(conn: &Connection, name: &str) -> AppResult<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidArgument("client name cannot be empty".into()));
    }

    conn.execute(
        "INSERT INTO clients (name, created_at) VALUES (?1, ?2)",
        rusqlite::params![name, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_clients(conn: &Connection) -> AppResult<Vec<Client>> {
    let mut stmt = conn.prepare("SELECT id, name, created_at FROM clients ORDER BY name ASC, id ASC")?;
    let rows = stmt.query_map([], map_client)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_client(conn: &Connection, id: i64) -> AppResult<Client> {
    conn.query_row(
        "SELECT id, name, created_at FROM clients WHERE id = ?1",
        [id],
        map_client,
    )
    .optional()?
    .ok_or_else(|| AppError::NotFound(format!("Client #{id}")))
}
