// src/import/excel_date.rs

use crate::models::{CellValue, Stamp};
use crate::utils::time::time_from_day_fraction;
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

/// Serial number of 1970-01-01 in the 1900 date system.
pub const UNIX_EPOCH_SERIAL: f64 = 25569.0;

/// Outcome of decoding one source field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoded<T> {
    /// Cell empty or absent: nothing to count.
    Missing,
    Value(T),
    /// Cell present but not understood; counted in the run diagnostics.
    Invalid,
}

impl<T> Decoded<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Decoded::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Decoded::Invalid)
    }
}

/// Serial `v` → Unix epoch + (v − 25569) days, rounded to the second.
pub fn serial_to_datetime(v: f64) -> Option<NaiveDateTime> {
    if !v.is_finite() {
        return None;
    }
    let secs = ((v - UNIX_EPOCH_SERIAL) * 86_400.0).round();
    if secs.abs() > 1e13 {
        return None;
    }
    DateTime::from_timestamp(secs as i64, 0).map(|dt| dt.naive_utc())
}

pub fn datetime_to_serial(dt: &NaiveDateTime) -> f64 {
    let secs = dt.and_utc().timestamp() as f64;
    UNIX_EPOCH_SERIAL + secs / 86_400.0
}

/// Serials below 1 only carry a time of day.
pub fn stamp_from_serial(v: f64) -> Option<Stamp> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    if v < 1.0 {
        return time_from_day_fraction(v).map(Stamp::time_only);
    }
    serial_to_datetime(v).map(Stamp::at)
}

/// ISO-8601 duration (`PT09H06M08S`, `P1DT2H`) → days. ODS time cells arrive
/// in this form.
pub fn iso_duration_days(s: &str) -> Option<f64> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = RE
        .get_or_init(|| {
            Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$").ok()
        })
        .as_ref()?;

    let caps = re.captures(s.trim())?;
    if (1..=4).all(|i| caps.get(i).is_none()) {
        return None;
    }

    let part = |i: usize| -> Option<f64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0.0),
        }
    };
    let secs = part(1)? * 86_400.0 + part(2)? * 3_600.0 + part(3)? * 60.0 + part(4)?;
    Some(secs / 86_400.0)
}

/// Textual date-time layouts, tried in order.
const DATETIME_FORMATS: [&str; 8] = [
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Prova a interpretare una stringa come data/ora o solo ora.
pub fn parse_stamp_text(s: &str) -> Option<Stamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Stamp::at(dt));
        }
    }

    // fractional seconds ("2025-10-01T09:06:08.250") are cut off
    if let Some((head, _)) = s.split_once('.')
        && let Ok(dt) = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
    {
        return Some(Stamp::at(dt));
    }

    for fmt in TIME_FORMATS.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(Stamp::time_only(t.with_nanosecond(0).unwrap_or(t)));
        }
    }

    if let Ok(v) = s.parse::<f64>() {
        return stamp_from_serial(v);
    }

    // a duration only stands for a time of day when it stays under 24h
    match iso_duration_days(s) {
        Some(days) if days < 1.0 => time_from_day_fraction(days).map(Stamp::time_only),
        _ => None,
    }
}

/// Decode a login/logout cell.
pub fn decode_stamp(cell: &CellValue) -> Decoded<Stamp> {
    let parsed = match cell {
        CellValue::Empty => return Decoded::Missing,
        CellValue::Text(s) if s.trim().is_empty() => return Decoded::Missing,
        CellValue::Text(s) => parse_stamp_text(s),
        CellValue::Number(v) | CellValue::DateTime(v) => stamp_from_serial(*v),
        CellValue::Bool(_) => None,
    };

    match parsed {
        Some(stamp) => Decoded::Value(stamp),
        None => Decoded::Invalid,
    }
}

/// Decode a worked-hours cell. Duration-formatted cells (fractions of a day)
/// and `H:mm` text are converted to decimal hours.
pub fn decode_hours(cell: &CellValue) -> Decoded<f64> {
    let parsed = match cell {
        CellValue::Empty => return Decoded::Missing,
        CellValue::Text(s) if s.trim().is_empty() => return Decoded::Missing,
        CellValue::Number(v) => Some(*v),
        CellValue::DateTime(v) => Some(*v * 24.0),
        CellValue::Text(s) => parse_hours_text(s),
        CellValue::Bool(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Decoded::Value(v),
        _ => Decoded::Invalid,
    }
}

fn parse_hours_text(s: &str) -> Option<f64> {
    let s = s.trim();

    if let Ok(v) = s.replace(',', ".").parse::<f64>() {
        return Some(v);
    }

    if let Some(days) = iso_duration_days(s) {
        return Some(days * 24.0);
    }

    let (h, m) = s.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if m >= 60 {
        return None;
    }
    Some(h as f64 + m as f64 / 60.0)
}
