// src/core/aggregate.rs

use crate::core::fields::{FieldSet, SourceLayout};
use crate::core::normalize::normalize_name;
use crate::import::{decode_hours, decode_stamp};
use crate::models::{EmployeeDayRecord, RawEntry, Session, Sheet};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Rows of a source sheet, decoded field by field.
#[derive(Debug, Clone, Default)]
pub struct EntryScan {
    pub entries: Vec<RawEntry>,
    /// Cells present but not understood as a timestamp or a number.
    pub unparseable_fields: usize,
}

/// Decode every data row (row 1 onwards) of the source sheet.
pub fn scan_entries(source: &Sheet, fields: &FieldSet) -> EntryScan {
    let header = source.header();
    let layout: SourceLayout = fields.resolve(&header);

    let mut scan = EntryScan::default();
    let Some(last) = source.last_row() else {
        return scan;
    };

    for row in 1..=last {
        if source.row_is_empty(row) {
            continue;
        }

        let name = source.get(row, layout.name.col).as_text();
        let login = decode_stamp(source.get(row, layout.login.col));
        let logout = decode_stamp(source.get(row, layout.logout.col));
        let hours = decode_hours(source.get(row, layout.hours.col));

        scan.unparseable_fields += [login.is_invalid(), logout.is_invalid(), hours.is_invalid()]
            .iter()
            .filter(|b| **b)
            .count();

        scan.entries.push(RawEntry {
            row,
            name,
            login: login.value(),
            logout: logout.value(),
            hours: hours.value(),
        });
    }

    scan
}

type DayMap<T> = BTreeMap<NaiveDate, T>;

/// Attendance grouped by employee and calendar date.
///
/// Two views are kept side by side:
/// - `records`: one [`EmployeeDayRecord`] per (name, date), merged field by
///   field with last write wins; each field is filed under its own date.
/// - `sessions`: the row-level login/logout pairs filed under the login's date
///   (or the logout's, when the row has no login), in input order.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub entries: usize,
    pub skipped_no_name: usize,
    /// Login/logout/hours values that could not be tied to a calendar date.
    pub undated_fields: usize,
    order: Vec<String>,
    records: HashMap<String, DayMap<EmployeeDayRecord>>,
    sessions: HashMap<String, DayMap<Vec<Session>>>,
    normalized: HashMap<String, String>,
}

impl Aggregation {
    pub fn build(entries: &[RawEntry]) -> Self {
        let mut agg = Aggregation::default();
        for entry in entries {
            agg.merge_entry(entry);
        }
        agg
    }

    /// Fold one entry into the maps. Entries must arrive in source order.
    pub fn merge_entry(&mut self, entry: &RawEntry) {
        self.entries += 1;

        let Some(name) = entry.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            self.skipped_no_name += 1;
            return;
        };

        if !self.records.contains_key(name) {
            self.order.push(name.to_string());
            self.records.insert(name.to_string(), BTreeMap::new());
            self.sessions.insert(name.to_string(), BTreeMap::new());
            self.normalized
                .entry(normalize_name(name))
                .or_insert_with(|| name.to_string());
        }

        // a bare time borrows the date of the other timestamp on the row
        let login_date = entry.login.and_then(|s| s.date);
        let logout_date = entry.logout.and_then(|s| s.date);
        let login = entry.login.and_then(|s| s.resolve(logout_date));
        let logout = entry.logout.and_then(|s| s.resolve(login_date));

        if entry.login.is_some() && login.is_none() {
            self.undated_fields += 1;
        }
        if entry.logout.is_some() && logout.is_none() {
            self.undated_fields += 1;
        }

        if let Some(days) = self.records.get_mut(name) {
            if let Some(at) = login {
                days.entry(at.date()).or_default().merge_login(at);
            }
            if let Some(at) = logout {
                days.entry(at.date()).or_default().merge_logout(at);
            }
            if let Some(hours) = entry.hours {
                match login.or(logout) {
                    Some(at) => days.entry(at.date()).or_default().merge_hours(hours),
                    None => self.undated_fields += 1,
                }
            }
        }

        if let Some(days) = self.sessions.get_mut(name) {
            let session = Session {
                seq: self.entries - 1,
                login,
                logout,
            };
            match (login, logout) {
                (Some(at), _) | (None, Some(at)) => {
                    days.entry(at.date()).or_default().push(session);
                }
                (None, None) => {}
            }
        }
    }

    /// Distinct source names in first-seen order.
    pub fn employees(&self) -> &[String] {
        &self.order
    }

    /// Find the source name for a roster name: exact, then trimmed, then by
    /// normalized form. `None` when the employee has no source rows.
    pub fn resolve_name(&self, roster_name: &str) -> Option<&str> {
        if let Some((key, _)) = self.records.get_key_value(roster_name) {
            return Some(key.as_str());
        }

        let trimmed = roster_name.trim();
        if let Some((key, _)) = self.records.get_key_value(trimmed) {
            return Some(key.as_str());
        }

        self.normalized
            .get(&normalize_name(roster_name))
            .map(|s| s.as_str())
    }

    pub fn records_for(&self, name: &str) -> Option<&DayMap<EmployeeDayRecord>> {
        self.records.get(name)
    }

    pub fn sessions_for(&self, name: &str) -> Option<&DayMap<Vec<Session>>> {
        self.sessions.get(name)
    }
}
