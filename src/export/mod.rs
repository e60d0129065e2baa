// src/export/mod.rs

pub mod fs_utils;
pub mod html;
pub mod model;
pub mod table;
pub mod xlsx;

pub use html::{html_body, plain_body};
pub use table::render_table;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for written report files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
