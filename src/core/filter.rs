//! Job validity: which jobs are still in production.

use crate::config::ReportRules;
use crate::core::hours::aggregate_hours;
use crate::db::PunchSource;
use crate::errors::AppResult;
use crate::models::{Job, ReportRow};
use crate::utils::date::stale_cutoff;
use chrono::NaiveDateTime;

/// A job is current when it has no outfitting punch yet (still in
/// fabrication) or its latest outfitting punch is newer than `cutoff`.
pub fn is_current(latest: Option<NaiveDateTime>, cutoff: NaiveDateTime) -> bool {
    match latest {
        None => true,
        Some(ts) => ts > cutoff,
    }
}

/// Keep the current jobs, aggregate their hours and sort by boat name.
///
/// Any query failure aborts the whole batch; there is no per-job recovery.
pub fn filter_and_aggregate<S: PunchSource + ?Sized>(
    source: &S,
    jobs: &[Job],
    rules: &ReportRules,
    now: NaiveDateTime,
) -> AppResult<Vec<ReportRow>> {
    let cutoff = stale_cutoff(now, rules.stale_after_days);

    let mut rows = Vec::new();
    for job in jobs {
        let latest = source.latest_punch(job.id, rules.outfitting_department_id)?;
        if !is_current(latest, cutoff) {
            continue;
        }
        let hours = aggregate_hours(source, job.id)?;
        rows.push(ReportRow::new(job.boat_name(), hours));
    }

    rows.sort_by(|a, b| a.boat.cmp(&b.boat));
    Ok(rows)
}
