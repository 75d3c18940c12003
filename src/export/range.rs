// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use crate::utils::date::{month_last_day, parse_date};
use chrono::NaiveDate;

/// Parse --range (year / month / day / intervallo).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD (or M/D/YYYY)
/// - START:END with any of the shapes above on both sides
///
/// A year or month on the left starts at its first day, on the right it ends
/// at its last day. The start must not be after the end.
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let (start, end) = match r.split_once(':') {
        Some((start_raw, end_raw)) => (
            period_bounds(start_raw.trim())?.0,
            period_bounds(end_raw.trim())?.1,
        ),
        None => period_bounds(r.trim())?,
    };

    DateRange::new(start, end)
}

/// First and last day of a single period expression.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    // YYYY-MM-DD / M/D/YYYY
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 if p.is_ascii() && p.as_bytes()[4] == b'-' => {
            let y: i32 = p[0..4].parse().map_err(|_| invalid())?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid())?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        _ => Err(invalid()),
    }
}
