use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing coachweek…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;

    println!(
        "✅ Database initialized at {} ({} migration(s) applied)",
        &db_path, applied
    );

    audit_quiet(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 coachweek initialization completed!");
    Ok(())
}
