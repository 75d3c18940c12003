//! Time utilities: formatting time-of-day values for output cells.

use chrono::{NaiveTime, Timelike};

/// Zero-padded `HH:MM`; seconds are dropped, not rounded.
pub fn format_hhmm(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Fraction of a day (`0.5` = noon) → time of day, rounded to the second.
pub fn time_from_day_fraction(fraction: f64) -> Option<NaiveTime> {
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return None;
    }
    let secs = (fraction * 86_400.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs.min(86_399), 0)
}
