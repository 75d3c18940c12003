// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Make sure the converted workbook may be written to `path`.
///
/// A missing file or `--force` passes straight through. An existing file is
/// only replaced after the user answers `y` on an interactive terminal; when
/// stdin is piped the run stops and points at `--force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let keep = || {
        AppError::Export(format!(
            "{} already exists; pass --force or choose another --out",
            path.display()
        ))
    };

    if !io::stdin().is_terminal() {
        return Err(keep());
    }

    warning(format!(
        "Output workbook '{}' is already there.",
        path.display()
    ));
    print!("Replace it with the new timesheet? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("The previous workbook will be replaced.");
            Ok(())
        }
        _ => Err(keep()),
    }
}
