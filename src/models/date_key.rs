use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Calendar-date grouping key. Header labels such as `1/10` carry no year and
/// match that day/month in any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateKey {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
}

impl DateKey {
    pub fn from_date(d: NaiveDate) -> Self {
        Self {
            day: d.day(),
            month: d.month(),
            year: Some(d.year()),
        }
    }

    /// Parse a day-first header label (`D/M` or `D/M/YYYY`, two-digit years
    /// are 20YY). Surrounding text after the date is ignored.
    pub fn parse_label(label: &str, separator: char) -> Option<Self> {
        static RE: OnceLock<Option<Regex>> = OnceLock::new();
        let re = RE
            .get_or_init(|| Regex::new(r"^\s*(\d{1,2})/(\d{1,2})(?:/(\d{2}|\d{4}))?(?:\s|$)").ok())
            .as_ref()?;

        let normalized;
        let text = if separator == '/' {
            label
        } else {
            normalized = label.replace(separator, "/");
            normalized.as_str()
        };

        let caps = re.captures(text)?;
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year = match caps.get(3) {
            Some(y) if y.as_str().len() == 2 => Some(2000 + y.as_str().parse::<i32>().ok()?),
            Some(y) => Some(y.as_str().parse::<i32>().ok()?),
            None => None,
        };

        // 31/2 and friends are rejected; without a year, 29/2 is allowed
        let probe_year = year.unwrap_or(2000);
        NaiveDate::from_ymd_opt(probe_year, month, day)?;

        Some(Self { day, month, year })
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.day == date.day()
            && self.month == date.month()
            && self.year.is_none_or(|y| y == date.year())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(y) => write!(f, "{}/{}/{}", self.day, self.month, y),
            None => write!(f, "{}/{}", self.day, self.month),
        }
    }
}

/// Inclusive calendar range selecting range-driven mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start date {} is after end date {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )));
        }
        Ok(Self { start, end })
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        crate::utils::date::days_between(self.start, self.end)
    }
}
