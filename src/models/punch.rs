use chrono::NaiveDateTime;

/// One punch row as seen by the hours aggregation: the full department
/// name and the punch timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPunch {
    pub department: String,
    pub timestamp: NaiveDateTime,
}

impl DepartmentPunch {
    pub fn new(department: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            department: department.into(),
            timestamp,
        }
    }
}
