use log::info;
use rusqlite::{Connection, OptionalExtension, Result, params};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered list of schema migrations: (version, description, apply).
/// Each version is applied once and then recorded in the `log` table.
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20260105_0001_create_clients",
        "Created clients table",
        create_clients_table,
    ),
    (
        "20260105_0002_create_templates",
        "Created templates table",
        create_templates_table,
    ),
    (
        "20260105_0003_create_sessions",
        "Created sessions table",
        create_sessions_table,
    ),
    (
        "20260105_0004_create_workout_plans",
        "Created workout_plans table",
        create_workout_plans_table,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_clients_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )
}

fn create_templates_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS templates (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            session_type  TEXT,
            created_at    TEXT NOT NULL
        );
        "#,
    )
}

/// Sessions keep `template_id` without a foreign key: a deleted template
/// must not take the session history with it.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id         INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
            date              TEXT NOT NULL,
            time              TEXT,
            status            TEXT NOT NULL DEFAULT 'scheduled'
                              CHECK(status IN ('scheduled','completed','no_show','cancelled')),
            template_id       INTEGER,
            template_name     TEXT,
            session_type      TEXT,
            duration_minutes  INTEGER,
            notes             TEXT,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_client_date ON sessions(client_id, date);
        "#,
    )
}

fn create_workout_plans_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workout_plans (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id          INTEGER REFERENCES clients(id) ON DELETE SET NULL,
            name               TEXT NOT NULL,
            description        TEXT,
            sessions_per_week  INTEGER CHECK(sessions_per_week IS NULL OR sessions_per_week BETWEEN 0 AND 7),
            created_at         TEXT NOT NULL,
            updated_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workout_plans_client ON workout_plans(client_id);
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, description: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![version, description],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, description)?;
        info!("migration applied: {version} ({description})");
        applied += 1;
    }

    Ok(applied)
}

/// Number of known migrations not yet recorded as applied.
pub fn pending_count(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut pending = 0;
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            pending += 1;
        }
    }
    Ok(pending)
}
