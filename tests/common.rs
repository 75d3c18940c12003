#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{Format, Workbook};
use rtimesheet::config::Config;
use rtimesheet::core::{Conversion, ConversionRequest, ConvertLogic, LogCollector};
use rtimesheet::errors::AppResult;
use rtimesheet::models::{CellValue, DateRange, Sheet};
use rtimesheet::import::read_first_sheet;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Cell used to build input workbooks.
#[derive(Clone, Debug)]
pub enum T {
    S(&'static str),
    N(f64),
    /// Serial date-time written with a date format (read back as a native date).
    D(f64),
    E,
}

/// Build an xlsx workbook in memory from rows of cells.
pub fn xlsx(rows: &[Vec<T>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_fmt = Format::new().set_num_format("m/d/yyyy h:mm");
    let sheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                T::S(s) => {
                    sheet.write_string(r, c, *s).expect("write string");
                }
                T::N(n) => {
                    sheet.write_number(r, c, *n).expect("write number");
                }
                T::D(serial) => {
                    sheet
                        .write_number_with_format(r, c, *serial, &date_fmt)
                        .expect("write date");
                }
                T::E => {}
            }
        }
    }

    workbook.save_to_buffer().expect("save workbook")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).expect("valid range")
}

/// Run the pipeline with default settings.
pub fn convert(
    source: &[u8],
    reference: &[u8],
    range: Option<DateRange>,
) -> (AppResult<Conversion>, Vec<String>) {
    let mut log = LogCollector::default();
    let request = ConversionRequest {
        source: Some(source),
        reference: Some(reference),
        range,
    };
    let result = ConvertLogic::convert(&request, &Config::default(), &mut log);
    (result, log.messages)
}

/// Re-read the output bytes through the crate's own reader.
pub fn reread(conversion: &Conversion) -> Sheet {
    read_first_sheet(&conversion.bytes).expect("output readable")
}

pub fn text(sheet: &Sheet, row: u32, col: u32) -> Option<String> {
    match sheet.get(row, col) {
        CellValue::Text(s) => Some(s.clone()),
        CellValue::Empty => None,
        other => panic!("unexpected cell at ({row},{col}): {other:?}"),
    }
}

/// Standard reference: STT + name, one row per employee.
pub fn roster_reference(names: &[&'static str]) -> Vec<u8> {
    let mut rows = vec![vec![T::S("STT"), T::S("Họ tên")]];
    for (i, n) in names.iter().enumerate() {
        rows.push(vec![T::N((i + 1) as f64), T::S(n)]);
    }
    xlsx(&rows)
}

/// Source header as produced by the attendance export.
pub fn source_header() -> Vec<T> {
    vec![
        T::S("Họ tên"),
        T::S("Thời điểm đăng nhập"),
        T::S("Thời điểm đăng xuất"),
        T::S("Số giờ làm"),
    ]
}

/// Unique temp file path, removed if present.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimesheet_{}.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Unique empty temp directory used as HOME.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimesheet_home_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}
