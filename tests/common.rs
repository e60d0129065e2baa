#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const FABRICATION: i64 = 101;
pub const PAINT: i64 = 102;
pub const CANVAS: i64 = 103;
pub const OUTFITTING: i64 = 221;
pub const FABRIC_SHOP: i64 = 104;
pub const ELECTRICAL: i64 = 105;

pub const WORKER: i64 = 1;

pub fn bh() -> Command {
    cargo_bin_cmd!("boathours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_boathours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create an empty output directory inside tempdir
pub fn temp_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_boathours_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Open `db_path`, create the schema and the standard departments/employee.
pub fn seed_store(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    boathours::db::schema::init_schema(&conn).expect("init schema");

    for (id, name) in [
        (FABRICATION, "Fabrication"),
        (PAINT, "Paint"),
        (CANVAS, "Canvas"),
        (OUTFITTING, "Outfitting"),
        (FABRIC_SHOP, "Fabric Shop"),
        (ELECTRICAL, "Electrical"),
    ] {
        conn.execute(
            "INSERT INTO tblDepartment (department_id, departmentname) VALUES (?1, ?2)",
            params![id, name],
        )
        .expect("insert department");
    }

    conn.execute(
        "INSERT INTO empMain (employee_id, name) VALUES (?1, 'Test Worker')",
        params![WORKER],
    )
    .expect("insert employee");

    conn
}

pub fn insert_job(conn: &Connection, job_id: i64, name: &str) {
    conn.execute(
        "INSERT INTO job (job_id, jobname) VALUES (?1, ?2)",
        params![job_id, name],
    )
    .expect("insert job");
}

/// Active punch by the standard worker; `inpunch_dt` equals the punch time.
pub fn punch(conn: &Connection, job_id: i64, department_id: i64, at: &str) {
    punch_full(conn, job_id, Some(WORKER), Some(department_id), at, true);
}

pub fn punch_full(
    conn: &Connection,
    job_id: i64,
    employee_id: Option<i64>,
    department_id: Option<i64>,
    at: &str,
    active: bool,
) {
    conn.execute(
        "INSERT INTO timeWorkingPunch
            (job_id, employee_id, department_id, task_id, inpunch_dt, workingpunch_ts, active_yn)
         VALUES (?1, ?2, ?3, NULL, ?4, ?4, ?5)",
        params![job_id, employee_id, department_id, at, active as i64],
    )
    .expect("insert punch");
}
