// src/import/reader.rs

use crate::errors::{AppError, AppResult};
use crate::import::excel_date::iso_duration_days;
use crate::models::{CellValue, Sheet};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Read the first sheet of a spreadsheet held in memory.
///
/// xlsx/xlsm/ods (zip) and xls (OLE) go through calamine; any other UTF-8
/// payload is treated as CSV with the header on the first line.
pub fn read_first_sheet(bytes: &[u8]) -> AppResult<Sheet> {
    if bytes.is_empty() {
        return Err(AppError::MissingInput("empty spreadsheet payload".into()));
    }

    if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
        return read_workbook(bytes);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => read_csv(text),
        Err(_) => Err(AppError::Other(
            "unrecognised spreadsheet container (expected xlsx, xls, ods or csv)".into(),
        )),
    }
}

fn read_workbook(bytes: &[u8]) -> AppResult<Sheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(AppError::EmptyWorkbook)?;

    let range = workbook.worksheet_range(&name)?;
    let mut sheet = Sheet::new(name);

    // calamine ranges start at the first used cell, not at A1
    let (row0, col0) = range.start().unwrap_or((0, 0));

    for (r, c, data) in range.cells() {
        let value = convert_cell(data);
        if !value.is_empty() {
            sheet.set(row0 + r as u32, col0 + c as u32, value);
        }
    }

    Ok(sheet)
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DurationIso(s) => match iso_duration_days(s) {
            Some(days) => CellValue::DateTime(days),
            None => CellValue::Text(s.clone()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
    }
}

fn read_csv(text: &str) -> AppResult<Sheet> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut sheet = Sheet::new("Sheet1");

    for (r, record) in rdr.records().enumerate() {
        let record = record?;
        for (c, field) in record.iter().enumerate() {
            if !field.is_empty() {
                sheet.set_text(r as u32, c as u32, field);
            }
        }
    }

    Ok(sheet)
}
