//! Time-tracking schema.
//!
//! Table and column names match the production time-clock database so the
//! report queries run unchanged against a SQLite copy of it.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

pub const REQUIRED_TABLES: [&str; 5] = [
    "job",
    "task",
    "empMain",
    "tblDepartment",
    "timeWorkingPunch",
];

/// Create every table and index if missing. Safe to run repeatedly.
pub fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS job (
            job_id    INTEGER PRIMARY KEY,
            jobname   TEXT
        );

        CREATE TABLE IF NOT EXISTS task (
            task_id   INTEGER PRIMARY KEY,
            taskname  TEXT
        );

        CREATE TABLE IF NOT EXISTS empMain (
            employee_id INTEGER PRIMARY KEY,
            name        TEXT
        );

        CREATE TABLE IF NOT EXISTS tblDepartment (
            department_id  INTEGER PRIMARY KEY,
            departmentname TEXT
        );

        CREATE TABLE IF NOT EXISTS timeWorkingPunch (
            punch_id        INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id          INTEGER NOT NULL,
            employee_id     INTEGER,
            department_id   INTEGER,
            task_id         INTEGER,
            inpunch_dt      TEXT NOT NULL,
            workingpunch_ts TEXT,
            active_yn       INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_punch_job ON timeWorkingPunch(job_id);
        CREATE INDEX IF NOT EXISTS idx_punch_job_dept ON timeWorkingPunch(job_id, department_id);
        "#,
    )?;
    Ok(())
}

/// Check whether `table` exists.
pub fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Tables the report needs that the store lacks.
pub fn missing_tables(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let mut missing = Vec::new();
    for t in REQUIRED_TABLES {
        if !table_exists(conn, t)? {
            missing.push(t);
        }
    }
    Ok(missing)
}
