// src/core/planner.rs

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, ColumnPlan, DateColumn, DateKey, DateRange, Sheet};
use crate::utils::date::dmy_label;
use std::collections::BTreeSet;

/// Widest sheet an xlsx file can hold.
pub const MAX_COLUMNS: usize = 16_384;

/// A header cell is a date column when its text contains the separator.
pub fn is_date_label(cell: &CellValue, separator: char) -> bool {
    cell.label().is_some_and(|l| l.contains(separator))
}

/// Header-inferred plan: every date-like header at column `i` owns the pair
/// `(i, i + 1)`. Repeated labels are kept; the later pair overwrites.
pub fn plan_from_header(reference: &Sheet, separator: char) -> ColumnPlan {
    let columns = reference
        .header()
        .iter()
        .enumerate()
        .filter(|(_, cell)| is_date_label(cell, separator))
        .filter_map(|(i, cell)| {
            let label = cell.label()?.to_string();
            Some(DateColumn {
                key: DateKey::parse_label(&label, separator),
                label,
                login_col: i as u32,
                logout_col: i as u32 + 1,
                hours_col: None,
            })
        })
        .collect();

    ColumnPlan::HeaderInferred { columns }
}

/// Range-driven plan: the reference's non-date columns are copied first, then
/// three columns (login, logout, hours) per date, inclusive on both ends.
pub fn plan_from_range(reference: &Sheet, range: &DateRange, separator: char) -> AppResult<ColumnPlan> {
    if range.start > range.end {
        return Err(AppError::InvalidRange(format!(
            "start date {} is after end date {}",
            range.start, range.end
        )));
    }

    // only pairs under a readable date label are dropped; "Chức vụ/Vị trí"
    // and the like are ordinary columns here
    let mut date_owned = BTreeSet::new();
    if let ColumnPlan::HeaderInferred { columns } = plan_from_header(reference, separator) {
        for c in columns.iter().filter(|c| c.key.is_some()) {
            date_owned.insert(c.login_col);
            date_owned.insert(c.logout_col);
        }
    }

    let copied: Vec<u32> = match reference.declared_range() {
        Some(r) => (0..=r.end_col).filter(|c| !date_owned.contains(c)).collect(),
        None => Vec::new(),
    };

    let dates = range.days();
    let total = copied.len() + dates.len() * 3;
    if total > MAX_COLUMNS {
        return Err(AppError::TooManyColumns(total));
    }

    let first = copied.len() as u32;
    let columns = dates
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let base = first + i as u32 * 3;
            DateColumn {
                label: dmy_label(*d),
                key: Some(DateKey::from_date(*d)),
                login_col: base,
                logout_col: base + 1,
                hours_col: Some(base + 2),
            }
        })
        .collect();

    Ok(ColumnPlan::RangeDriven {
        copied,
        dates,
        columns,
    })
}
