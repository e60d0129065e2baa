use crate::models::department::Department;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Accumulated hours per department bucket for one job.
///
/// A bucket is present only when at least one punch contributed to it;
/// a missing bucket means "no recorded hours", never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentHours(BTreeMap<String, Decimal>);

impl DepartmentHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `hours` to `bucket`, creating the bucket on first use.
    pub fn add(&mut self, bucket: &str, hours: Decimal) {
        *self.0.entry(bucket.to_string()).or_insert(Decimal::ZERO) += hours;
    }

    pub fn get(&self, bucket: &str) -> Option<Decimal> {
        self.0.get(bucket).copied()
    }

    pub fn department(&self, dept: Department) -> Option<Decimal> {
        self.get(dept.bucket())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Decimal)> for DepartmentHours {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        let mut hours = DepartmentHours::new();
        for (bucket, h) in iter {
            hours.add(&bucket, h);
        }
        hours
    }
}
