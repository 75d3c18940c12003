// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Sheet};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm";
const MAX_COLUMN_WIDTH: usize = 60;

/// Serialize a sheet model to xlsx bytes.
///
/// Only non-empty cells are written, so the `<dimension>` of the package is
/// exactly the bounding box of the model's cells. The creation time in the
/// document properties is pinned: identical sheets give identical bytes.
pub fn write_xlsx(sheet: &Sheet) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    if !sheet.name.is_empty() {
        // names that xlsx rejects (ods/csv imports) keep the default "Sheet1"
        worksheet.set_name(&sheet.name).ok();
    }

    let header_format = Format::new().set_bold();
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    // ---------------------------
    // Scrittura celle
    // ---------------------------
    let mut col_widths: BTreeMap<u16, usize> = BTreeMap::new();

    for (row, col, value) in sheet.cells() {
        let col = u16::try_from(col).map_err(|_| AppError::TooManyColumns(col as usize + 1))?;
        let width = write_cell(worksheet, row, col, value, &header_format, &datetime_format)?;

        let w = col_widths.entry(col).or_insert(0);
        *w = (*w).max(width);
    }

    if !sheet.is_empty() {
        worksheet.set_freeze_panes(1, 0).ok();
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths {
        worksheet.set_column_width(c, w.min(MAX_COLUMN_WIDTH) as f64 + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Scrive una singola cella e restituisce la larghezza del testo visualizzato.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    header_format: &Format,
    datetime_format: &Format,
) -> AppResult<usize> {
    let width = match value {
        CellValue::Empty => 0,
        CellValue::Text(s) => {
            if row == 0 {
                worksheet.write_string_with_format(row, col, s, header_format)?;
            } else {
                worksheet.write_string(row, col, s)?;
            }
            UnicodeWidthStr::width(s.as_str())
        }
        CellValue::Number(n) => {
            if row == 0 {
                worksheet.write_number_with_format(row, col, *n, header_format)?;
            } else {
                worksheet.write_number(row, col, *n)?;
            }
            n.to_string().len()
        }
        CellValue::DateTime(serial) => {
            worksheet.write_number_with_format(row, col, *serial, datetime_format)?;
            DATETIME_FORMAT.len()
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
            5
        }
    };

    Ok(width)
}
