// src/core/fields.rs

use crate::models::CellValue;
use serde::{Deserialize, Serialize};

/// Prioritized lookup of one logical column: the first recognised header label
/// wins, otherwise the column at `position` is used.
///
/// The positional fallback mirrors how the attendance exports are laid out
/// (STT, name, login, logout, hours) and breaks if those columns are reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLookup {
    pub labels: Vec<String>,
    pub position: u32,
}

/// Where a field was found in a given header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub col: u32,
    /// Matching header label, `None` when the positional fallback was used.
    pub label: Option<String>,
}

impl FieldLookup {
    pub fn new(labels: &[&str], position: u32) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            position,
        }
    }

    pub fn name() -> Self {
        Self::new(
            &["Họ tên", "Họ Tên", "Ho ten", "Name", "Tên", "Họ và tên"],
            1,
        )
    }

    pub fn login() -> Self {
        Self::new(
            &["Thời điểm đăng nhập", "Thoi diem dang nhap", "Login", "Đăng nhập"],
            2,
        )
    }

    pub fn logout() -> Self {
        Self::new(
            &["Thời điểm đăng xuất", "Thoi diem dang xuat", "Logout", "Đăng xuất"],
            3,
        )
    }

    pub fn hours() -> Self {
        Self::new(
            &["Số giờ làm", "So gio lam", "Hours", "Total Hours", "Giờ làm"],
            4,
        )
    }

    /// Resolve against a header row. Labels are compared exactly (case and
    /// diacritics matter) after trimming the header text.
    pub fn resolve(&self, header: &[&CellValue]) -> ResolvedField {
        for wanted in &self.labels {
            let hit = header
                .iter()
                .position(|cell| cell.label().is_some_and(|l| l.trim() == wanted.as_str()));

            if let Some(col) = hit {
                return ResolvedField {
                    col: col as u32,
                    label: Some(wanted.clone()),
                };
            }
        }

        ResolvedField {
            col: self.position,
            label: None,
        }
    }
}

/// The four lookups used to read a source sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSet {
    pub name: FieldLookup,
    pub login: FieldLookup,
    pub logout: FieldLookup,
    pub hours: FieldLookup,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            name: FieldLookup::name(),
            login: FieldLookup::login(),
            logout: FieldLookup::logout(),
            hours: FieldLookup::hours(),
        }
    }
}

/// Columns of a source sheet, resolved once from its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub name: ResolvedField,
    pub login: ResolvedField,
    pub logout: ResolvedField,
    pub hours: ResolvedField,
}

impl FieldSet {
    pub fn resolve(&self, header: &[&CellValue]) -> SourceLayout {
        SourceLayout {
            name: self.name.resolve(header),
            login: self.login.resolve(header),
            logout: self.logout.resolve(header),
            hours: self.hours.resolve(header),
        }
    }
}
