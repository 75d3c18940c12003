use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::plan_from_header;
use crate::core::roster::read_roster;
use crate::errors::{AppError, AppResult};
use crate::import::read_first_sheet;
use crate::ui::messages::{header, info, key_value, warning};
use crate::utils::address::column_name;
use crate::utils::encode_range;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `inspect` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { file } = cmd {
        let path = expand_tilde(file);
        if !path.exists() {
            return Err(AppError::MissingInput(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let sheet = read_first_sheet(&fs::read(&path)?)?;

        header(format!("{} [{}]", path.display(), sheet.name));

        let Some(range) = sheet.declared_range() else {
            warning("The first sheet is empty.");
            return Ok(());
        };
        key_value("Declared range", encode_range(&range));

        // ---------------------------
        // Header
        // ---------------------------
        println!();
        for (c, cell) in sheet.header().iter().enumerate() {
            if let Some(text) = cell.as_text() {
                println!("  {:>4}  {}", column_name(c as u32), text);
            }
        }

        // ---------------------------
        // Source columns
        // ---------------------------
        println!();
        let layout = cfg.fields.resolve(&sheet.header());
        for (field, resolved) in [
            ("name", &layout.name),
            ("login", &layout.login),
            ("logout", &layout.logout),
            ("hours", &layout.hours),
        ] {
            let how = match &resolved.label {
                Some(l) => format!("\"{l}\""),
                None => "positional fallback".to_string(),
            };
            key_value(field, format!("{} ({how})", column_name(resolved.col)));
        }

        // ---------------------------
        // Reference view
        // ---------------------------
        println!();
        let plan = plan_from_header(&sheet, cfg.date_separator);
        let roster = read_roster(&sheet, &cfg.fields.name);
        key_value("Date columns", plan.columns().len());
        key_value("Roster employees", roster.len());

        for col in plan.columns().iter().filter(|c| c.key.is_none()) {
            warning(format!(
                "Header '{}' in column {} looks like a date but cannot be read as D/M[/YYYY]",
                col.label,
                column_name(col.login_col)
            ));
        }

        info("Inspection completed.");
    }
    Ok(())
}
