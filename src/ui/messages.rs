//! Console output helpers (colours + icons). Library code never prints
//! directly; it goes through these or through a progress sink.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[90m";

/// Severity of a console line; picks colour, icon and stream.
#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn line(level: Level, msg: &dyn fmt::Display) {
    let text = format!("{}{}{} {}{}", level.colour(), BOLD, level.icon(), RESET, msg);
    match level {
        Level::Error => eprintln!("{text}"),
        _ => println!("{text}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    line(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(Level::Warning, &msg);
}

/// Goes to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    line(Level::Error, &msg);
}

/// One line of the processing log.
pub fn progress<T: fmt::Display>(msg: T) {
    println!("{DIM}•{RESET} {msg}");
}

/// `label ...... value` line used by the run summary.
pub fn key_value<T: fmt::Display>(label: &str, value: T) {
    println!("  {label:<28}{BOLD}{value}{RESET}");
}

/// Section title, e.g. "Processing log".
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{BOLD}── {msg} ──{RESET}\n", Level::Info.colour());
}
