use super::stamp::Stamp;

/// One source-file row after field resolution and decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// 0-based sheet row the entry was read from.
    pub row: u32,
    pub name: Option<String>,
    pub login: Option<Stamp>,
    pub logout: Option<Stamp>,
    pub hours: Option<f64>,
}
