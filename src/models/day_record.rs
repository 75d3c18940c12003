use chrono::NaiveDateTime;

/// Per-employee, per-date attendance (range-driven mode).
///
/// Each field is overwritten independently by later entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDayRecord {
    pub login: Option<NaiveDateTime>,
    pub logout: Option<NaiveDateTime>,
    pub hours: Option<f64>,
}

impl EmployeeDayRecord {
    pub fn merge_login(&mut self, at: NaiveDateTime) {
        self.login = Some(at);
    }

    pub fn merge_logout(&mut self, at: NaiveDateTime) {
        self.logout = Some(at);
    }

    pub fn merge_hours(&mut self, hours: f64) {
        self.hours = Some(hours);
    }
}

/// A login/logout pair taken from a single source row (header-inferred mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Position of the source entry, used to pick the earliest session when a
    /// yearless header key matches several dates.
    pub seq: usize,
    pub login: Option<NaiveDateTime>,
    pub logout: Option<NaiveDateTime>,
}
