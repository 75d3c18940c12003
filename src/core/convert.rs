// src/core/convert.rs

use crate::config::Config;
use crate::core::aggregate::{Aggregation, scan_entries};
use crate::core::composer::compose;
use crate::core::planner::{plan_from_header, plan_from_range};
use crate::core::progress::ProgressSink;
use crate::core::roster::read_roster;
use crate::errors::{AppError, AppResult};
use crate::export::xlsx::write_xlsx;
use crate::import::read_first_sheet;
use crate::models::{ColumnPlan, DateRange, Summary};

/// Inputs of one conversion, as handed over by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionRequest<'a> {
    pub source: Option<&'a [u8]>,
    pub reference: Option<&'a [u8]>,
    /// `Some` selects range-driven mode.
    pub range: Option<DateRange>,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub summary: Summary,
}

impl<'a> ConversionRequest<'a> {
    /// Input errors are reported before any file is parsed.
    pub fn validate(&self) -> AppResult<(&'a [u8], &'a [u8])> {
        if let Some(r) = &self.range
            && r.start > r.end
        {
            return Err(AppError::InvalidRange(format!(
                "start date {} is after end date {}",
                r.start, r.end
            )));
        }

        let source = self
            .source
            .filter(|b| !b.is_empty())
            .ok_or_else(|| AppError::MissingInput("source file".into()))?;
        let reference = self
            .reference
            .filter(|b| !b.is_empty())
            .ok_or_else(|| AppError::MissingInput("reference file".into()))?;

        Ok((source, reference))
    }
}

/// Logica di alto livello per la conversione.
pub struct ConvertLogic;

impl ConvertLogic {
    /// Run the whole pipeline: read source, read reference, aggregate, plan,
    /// compose, serialize. Each stage completes before the next starts and
    /// nothing is returned unless every stage succeeds.
    pub fn convert(
        request: &ConversionRequest<'_>,
        cfg: &Config,
        sink: &mut dyn ProgressSink,
    ) -> AppResult<Conversion> {
        let result = Self::run(request, cfg, sink);
        if let Err(e) = &result {
            sink.fail(&format!("Error: {e}"));
        }
        result
    }

    fn run(
        request: &ConversionRequest<'_>,
        cfg: &Config,
        sink: &mut dyn ProgressSink,
    ) -> AppResult<Conversion> {
        let (source_bytes, reference_bytes) = request.validate()?;
        let mut summary = Summary::default();

        // ---------------------------
        // Source
        // ---------------------------
        sink.emit("Reading source file...");
        let source = read_first_sheet(source_bytes)?;
        let scan = scan_entries(&source, &cfg.fields);
        summary.entries_found = scan.entries.len();
        summary.unparseable_fields = scan.unparseable_fields;
        sink.emit(&format!(
            "Found {} entries in the source file",
            summary.entries_found
        ));

        // ---------------------------
        // Reference
        // ---------------------------
        sink.emit("Reading reference file...");
        let reference = read_first_sheet(reference_bytes)?;
        let roster = read_roster(&reference, &cfg.fields.name);
        summary.roster_employees = roster.len();
        sink.emit(&format!(
            "Found {} employees in the reference file",
            summary.roster_employees
        ));

        // ---------------------------
        // Aggregation
        // ---------------------------
        sink.emit("Processing login/logout data...");
        let data = Aggregation::build(&scan.entries);
        summary.source_employees = data.employees().len();
        summary.skipped_no_name = data.skipped_no_name;
        summary.undated_fields = data.undated_fields;

        if data.skipped_no_name > 0 {
            sink.emit(&format!(
                "Skipped {} entries without an employee name",
                data.skipped_no_name
            ));
        }
        if summary.unparseable_fields > 0 {
            sink.emit(&format!(
                "Ignored {} unreadable date/time or hours values",
                summary.unparseable_fields
            ));
        }
        if summary.undated_fields > 0 {
            sink.emit(&format!(
                "Ignored {} values without a calendar date",
                summary.undated_fields
            ));
        }

        // ---------------------------
        // Column plan
        // ---------------------------
        let plan = match &request.range {
            Some(range) => plan_from_range(&reference, range, cfg.date_separator)?,
            None => plan_from_header(&reference, cfg.date_separator),
        };
        summary.date_columns = plan.columns().len();

        match (&plan, &request.range) {
            (ColumnPlan::RangeDriven { .. }, Some(range)) => sink.emit(&format!(
                "Planned {} dates ({} columns) from {} to {}",
                summary.date_columns,
                plan.width(),
                range.start.format("%Y-%m-%d"),
                range.end.format("%Y-%m-%d")
            )),
            _ => sink.emit(&format!(
                "Found {} date columns in the reference header",
                summary.date_columns
            )),
        }

        // ---------------------------
        // Compose + write
        // ---------------------------
        sink.emit("Filling output sheet...");
        let composition = compose(&reference, &roster, &plan, &data);
        summary.matched = composition.matched;
        summary.unmatched_roster = composition.unmatched_roster;
        summary.unmatched_source = composition.unmatched_source;
        summary.cells_filled = composition.cells_filled;

        sink.emit(&format!(
            "Matched {} employees, {} without data",
            summary.matched, summary.unmatched_roster
        ));
        if summary.unmatched_source > 0 {
            sink.emit(&format!(
                "{} employees in the source file are not in the reference",
                summary.unmatched_source
            ));
        }
        sink.emit(&format!(
            "Filled {} cells with time data",
            summary.cells_filled
        ));

        let bytes = write_xlsx(&composition.sheet)?;
        sink.emit("Conversion completed successfully!");

        Ok(Conversion {
            bytes,
            file_name: cfg.output_file_name(request.range.as_ref()),
            summary,
        })
    }
}
