use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ConsoleSink, ConversionRequest, ConvertLogic};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::report::{RunReport, export_report};
use crate::export::{notify_export_success, parse_range};
use crate::models::Summary;
use crate::ui::messages::{header, key_value, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle the `convert` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        source,
        reference,
        range,
        out,
        report,
        force,
    } = cmd
    {
        // the range is checked before any file is touched
        let range = range.as_deref().map(parse_range).transpose()?;

        let source_path = expand_tilde(source);
        let reference_path = expand_tilde(reference);
        let source_bytes = read_input(&source_path, "source")?;
        let reference_bytes = read_input(&reference_path, "reference")?;

        let out_path = match out {
            Some(o) => expand_tilde(o),
            None => PathBuf::from(cfg.output_file_name(range.as_ref())),
        };
        ensure_writable(&out_path, *force)?;

        header("Processing log");

        let request = ConversionRequest {
            source: Some(source_bytes.as_slice()),
            reference: Some(reference_bytes.as_slice()),
            range,
        };
        let mut sink = ConsoleSink::default();
        let conversion = ConvertLogic::convert(&request, cfg, &mut sink)?;

        fs::write(&out_path, &conversion.bytes)?;
        println!();
        notify_export_success("XLSX", &out_path);

        print_summary(&conversion.summary);

        if let Some(report_path) = report {
            let run = RunReport {
                file_name: &conversion.file_name,
                range,
                log: &sink.messages,
                summary: &conversion.summary,
            };
            export_report(&run, &expand_tilde(report_path))?;
        }
    }
    Ok(())
}

fn read_input(path: &Path, what: &str) -> AppResult<Vec<u8>> {
    if !path.exists() {
        return Err(AppError::MissingInput(format!(
            "{what} file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read(path)?)
}

fn print_summary(s: &Summary) {
    println!();
    key_value("Entries in source", s.entries_found);
    key_value("Employees in source", s.source_employees);
    key_value("Employees in reference", s.roster_employees);
    key_value("Date columns", s.date_columns);
    key_value("Matched employees", s.matched);
    key_value("Cells filled", s.cells_filled);

    if s.unmatched_roster > 0 {
        warning(format!("{} reference employees have no data", s.unmatched_roster));
    }
    if s.unmatched_source > 0 {
        warning(format!(
            "{} source employees are missing from the reference",
            s.unmatched_source
        ));
    }
}
