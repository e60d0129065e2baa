pub mod pool;
pub mod schema;
pub mod source;

pub use source::{PunchSource, SqlitePunchSource};
