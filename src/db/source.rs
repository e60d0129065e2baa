//! Read access to the time-clock store.
//!
//! The report needs exactly three query shapes; `PunchSource` names them so
//! the aggregation and the validity filter can run against any store.

use crate::errors::{AppError, AppResult};
use crate::models::{DepartmentPunch, Job};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};

pub trait PunchSource {
    /// Distinct jobs with an active punch after `since` and an id above
    /// `min_job_id`, ordered by job id.
    fn list_jobs(&self, since: NaiveDateTime, min_job_id: i64) -> AppResult<Vec<Job>>;

    /// Every punch of `job_id` that has both an employee and a department.
    fn department_punches(&self, job_id: i64) -> AppResult<Vec<DepartmentPunch>>;

    /// Most recent active punch of `job_id` in `department_id`.
    fn latest_punch(&self, job_id: i64, department_id: i64) -> AppResult<Option<NaiveDateTime>>;
}

pub struct SqlitePunchSource<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePunchSource<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PunchSource for SqlitePunchSource<'_> {
    fn list_jobs(&self, since: NaiveDateTime, min_job_id: i64) -> AppResult<Vec<Job>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT DISTINCT tp.job_id, job.jobname
               FROM timeWorkingPunch tp
          LEFT JOIN job ON tp.job_id = job.job_id
              WHERE datetime(tp.inpunch_dt) > datetime(?1)
                AND tp.active_yn = 1
                AND tp.job_id > ?2
           ORDER BY tp.job_id ASC",
        )?;

        let rows = stmt.query_map(params![format_timestamp(&since), min_job_id], |row| {
            Ok(Job {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut jobs = Vec::new();
        for r in rows {
            jobs.push(r?);
        }
        Ok(jobs)
    }

    fn department_punches(&self, job_id: i64) -> AppResult<Vec<DepartmentPunch>> {
        // job and task are left joined and never filter; employee and
        // department are inner joins and drop orphaned punches.
        let mut stmt = self.conn.prepare_cached(
            "SELECT dp.departmentname, tp.workingpunch_ts
               FROM timeWorkingPunch tp
          LEFT JOIN job ON tp.job_id = job.job_id
          LEFT JOIN task ON tp.task_id = task.task_id
               JOIN empMain em ON tp.employee_id = em.employee_id
               JOIN tblDepartment dp ON tp.department_id = dp.department_id
              WHERE tp.job_id = ?1",
        )?;

        let rows = stmt.query_map([job_id], map_department_punch)?;

        let mut punches = Vec::new();
        for r in rows {
            // A punch without a timestamp has no hour to quantize.
            if let Some(p) = r? {
                punches.push(p);
            }
        }
        Ok(punches)
    }

    fn latest_punch(&self, job_id: i64, department_id: i64) -> AppResult<Option<NaiveDateTime>> {
        // MAX(datetime(..)) would drop fractional seconds and skip
        // unreadable values as NULL.
        let mut stmt = self.conn.prepare_cached(
            "SELECT tp.workingpunch_ts
               FROM timeWorkingPunch tp
              WHERE tp.job_id = ?1
                AND tp.active_yn = 1
                AND tp.department_id = ?2
                AND tp.workingpunch_ts IS NOT NULL",
        )?;

        let rows = stmt.query_map(params![job_id, department_id], |row| row.get::<_, String>(0))?;

        let mut latest: Option<NaiveDateTime> = None;
        for r in rows {
            let raw = r?;
            let ts = parse_timestamp(&raw).ok_or(AppError::InvalidTimestamp(raw))?;
            latest = latest.max(Some(ts));
        }
        Ok(latest)
    }
}

fn map_department_punch(row: &Row<'_>) -> rusqlite::Result<Option<DepartmentPunch>> {
    let department: Option<String> = row.get(0)?;
    let ts: Option<String> = row.get(1)?;

    let Some(ts) = ts else {
        return Ok(None);
    };

    let timestamp = parse_timestamp(&ts).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts.clone())),
        )
    })?;

    Ok(Some(DepartmentPunch::new(
        department.unwrap_or_default(),
        timestamp,
    )))
}
