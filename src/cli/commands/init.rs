use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::init_schema;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode or if present)
///  - the time-clock tables in the SQLite store (idempotent)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = cfg.database.clone();
    Config::init_all(Path::new(&db_path), cli.test)?;

    info("Initializing boathours…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path));

    let pool = DbPool::new(&db_path)?;
    pool.with_conn(init_schema)?;

    success(format!("Time-clock schema ready at {}", db_path));
    Ok(())
}
