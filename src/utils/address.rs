//! Cell addressing: (row, column) coordinates ⇔ A1-style references.
//!
//! Rows and columns are 0-indexed everywhere in the crate; references are the
//! usual 1-based spreadsheet notation (`A1` is `(0, 0)`).

/// Column index → letters (`0` → `A`, `25` → `Z`, `26` → `AA`).
pub fn column_name(col: u32) -> String {
    let mut n = col + 1;
    let mut out = Vec::new();

    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.push(b'A' + rem);
        n = (n - 1) / 26;
    }

    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Letters → column index. Case-insensitive, `None` for anything that is not
/// a plain column name.
pub fn column_index(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }

    let mut col: u32 = 0;
    for ch in name.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let upper = ch.to_ascii_uppercase();
        col = col.checked_mul(26)?.checked_add(upper as u32 - 'A' as u32 + 1)?;
    }

    Some(col - 1)
}

/// `(row, col)` → `"B3"`.
pub fn encode_cell(row: u32, col: u32) -> String {
    format!("{}{}", column_name(col), row + 1)
}

/// `"B3"` → `(row, col)`. Absolute markers (`$B$3`) are accepted.
pub fn decode_cell(reference: &str) -> Option<(u32, u32)> {
    let cleaned: String = reference.trim().chars().filter(|c| *c != '$').collect();
    let split = cleaned.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cleaned.split_at(split);

    let col = column_index(letters)?;
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((row - 1, col))
}

/// A rectangular block of cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl CellRange {
    pub fn single(row: u32, col: u32) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row,
            end_col: col,
        }
    }

    /// Grow the range so that it also covers `(row, col)`.
    pub fn include(&mut self, row: u32, col: u32) {
        self.start_row = self.start_row.min(row);
        self.start_col = self.start_col.min(col);
        self.end_row = self.end_row.max(row);
        self.end_col = self.end_col.max(col);
    }

    pub fn rows(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    pub fn cols(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }
}

/// Range → `"A1:F12"` (a single cell collapses to `"A1"`).
pub fn encode_range(range: &CellRange) -> String {
    let start = encode_cell(range.start_row, range.start_col);
    if range.start_row == range.end_row && range.start_col == range.end_col {
        return start;
    }
    format!("{}:{}", start, encode_cell(range.end_row, range.end_col))
}

/// `"A1:F12"` or `"A1"` → range.
pub fn decode_range(reference: &str) -> Option<CellRange> {
    match reference.split_once(':') {
        Some((start, end)) => {
            let (sr, sc) = decode_cell(start)?;
            let (er, ec) = decode_cell(end)?;
            Some(CellRange {
                start_row: sr.min(er),
                start_col: sc.min(ec),
                end_row: sr.max(er),
                end_col: sc.max(ec),
            })
        }
        None => {
            let (r, c) = decode_cell(reference)?;
            Some(CellRange::single(r, c))
        }
    }
}
