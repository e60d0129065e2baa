use crate::models::hours::DepartmentHours;
use chrono::NaiveDate;

/// One line of the report: a boat and its hours per department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub boat: String,
    pub hours: DepartmentHours,
}

impl ReportRow {
    pub fn new(boat: impl Into<String>, hours: DepartmentHours) -> Self {
        Self {
            boat: boat.into(),
            hours,
        }
    }
}

/// The finished report for one run, rows sorted by boat name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date: NaiveDate,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn subject(&self) -> String {
        format!("Department Hours by Boat Report for {}.", self.date)
    }

    pub fn intro(&self) -> String {
        format!("Here is the Department Hours by Boat Report for {}.", self.date)
    }
}
