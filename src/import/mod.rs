//! Spreadsheet Reader: raw bytes → sheet model, plus cell decoding.

pub mod excel_date;
mod reader;

pub use excel_date::{Decoded, decode_hours, decode_stamp, parse_stamp_text};
pub use reader::read_first_sheet;
