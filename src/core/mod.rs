pub mod filter;
pub mod hours;
pub mod report;

pub use filter::{filter_and_aggregate, is_current};
pub use hours::{aggregate_hours, aggregate_punches, quantize};
pub use report::ReportLogic;
