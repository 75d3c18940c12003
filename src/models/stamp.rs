use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A decoded login/logout value. Bare `H:mm` cells have no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
}

impl Stamp {
    pub fn at(dt: NaiveDateTime) -> Self {
        Self {
            date: Some(dt.date()),
            time: dt.time(),
        }
    }

    pub fn time_only(time: NaiveTime) -> Self {
        Self { date: None, time }
    }

    /// Full timestamp, borrowing `fallback` when the stamp has no date of its own.
    pub fn resolve(&self, fallback: Option<NaiveDate>) -> Option<NaiveDateTime> {
        self.date.or(fallback).map(|d| d.and_time(self.time))
    }
}
