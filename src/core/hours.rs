//! Hours aggregation: punch timestamps → quantized hours per department.

use crate::db::PunchSource;
use crate::errors::AppResult;
use crate::models::department::department_bucket;
use crate::models::{DepartmentHours, DepartmentPunch};
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Quarter-hour quantization of a punch timestamp.
///
/// Returns the hour component plus the offset for the minute:
///
/// | minute | offset |
/// |--------|--------|
/// | 0      | +0.0   |
/// | 15     | +0.25  |
/// | 30     | +0.5   |
/// | 45     | +0.7   |
///
/// The 45-minute offset is 0.7, not 0.75. Any other minute yields `None`
/// and the punch contributes nothing.
pub fn quantize(ts: &NaiveDateTime) -> Option<Decimal> {
    let offset = match ts.minute() {
        0 => Decimal::ZERO,
        15 => Decimal::new(25, 2),
        30 => Decimal::new(5, 1),
        45 => Decimal::new(7, 1),
        _ => return None,
    };
    Some(Decimal::from(ts.hour()) + offset)
}

/// Sum quantized hours per 3-character department bucket.
pub fn aggregate_punches(punches: &[DepartmentPunch]) -> DepartmentHours {
    let mut hours = DepartmentHours::new();
    for p in punches {
        if let Some(h) = quantize(&p.timestamp) {
            hours.add(&department_bucket(&p.department), h);
        }
    }
    hours
}

/// Fetch every punch of `job_id` and aggregate it.
/// A job without punches yields an empty mapping.
pub fn aggregate_hours<S: PunchSource + ?Sized>(
    source: &S,
    job_id: i64,
) -> AppResult<DepartmentHours> {
    let punches = source.department_punches(job_id)?;
    Ok(aggregate_punches(&punches))
}
