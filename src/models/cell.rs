use crate::utils::CellRange;
use std::collections::BTreeMap;

/// Typed value of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    /// Spreadsheet serial date-time (days since 1899-12-30, fraction = time).
    DateTime(f64),
    Bool(bool),
}

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Label text of a header cell; only textual cells carry labels.
    pub fn label(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display text, used for employee names. Whole numbers lose the `.0`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) | CellValue::DateTime(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }
}

/// Sparse grid of cells for one sheet, addressed by absolute 0-based
/// `(row, col)` coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Writing an empty value clears the cell.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    pub fn set_text(&mut self, row: u32, col: u32, text: impl Into<String>) {
        self.set(row, col, CellValue::Text(text.into()));
    }

    pub fn set_number(&mut self, row: u32, col: u32, n: f64) {
        self.set(row, col, CellValue::Number(n));
    }

    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    pub fn row_is_empty(&self, row: u32) -> bool {
        self.cells.range((row, 0)..=(row, u32::MAX)).next().is_none()
    }

    /// Bounding box of every non-empty cell; `None` for an empty sheet.
    pub fn declared_range(&self) -> Option<CellRange> {
        let mut it = self.cells.keys();
        let &(r, c) = it.next()?;
        let mut range = CellRange::single(r, c);
        for &(r, c) in it {
            range.include(r, c);
        }
        Some(range)
    }

    /// Cells of row 0 from column 0 up to the last used column.
    pub fn header(&self) -> Vec<&CellValue> {
        match self.declared_range() {
            Some(range) => (0..=range.end_col).map(|c| self.get(0, c)).collect(),
            None => Vec::new(),
        }
    }

    /// Last used row index, if any.
    pub fn last_row(&self) -> Option<u32> {
        self.declared_range().map(|r| r.end_row)
    }

    /// Row-major iteration over the non-empty cells.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> {
        self.cells.iter().map(|(&(r, c), v)| (r, c, v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
