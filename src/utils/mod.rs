pub mod address;
pub mod date;
pub mod path;
pub mod time;

pub use address::{CellRange, decode_cell, decode_range, encode_cell, encode_range};
pub use time::format_hhmm;
