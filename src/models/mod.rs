pub mod department;
pub mod hours;
pub mod job;
pub mod outcome;
pub mod punch;
pub mod report;

pub use department::Department;
pub use hours::DepartmentHours;
pub use job::Job;
pub use punch::DepartmentPunch;
pub use report::{Report, ReportRow};
