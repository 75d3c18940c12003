// src/export/report.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::{DateRange, Summary};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON side-car describing a conversion run.
#[derive(Serialize, Debug)]
pub struct RunReport<'a> {
    pub file_name: &'a str,
    pub range: Option<DateRange>,
    pub log: &'a [String],
    pub summary: &'a Summary,
}

/// Export JSON pretty-printed.
pub(crate) fn export_report(report: &RunReport<'_>, path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("Run report", path);
    Ok(())
}
