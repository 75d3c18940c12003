// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod range;
pub mod report;
pub mod xlsx;

pub use range::parse_range;
pub use report::RunReport;
pub use xlsx::write_xlsx;

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
