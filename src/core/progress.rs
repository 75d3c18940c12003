//! Progress messages emitted at each stage boundary of a conversion.

use crate::ui::messages::progress;

/// Receives the human-readable progress log of a run.
pub trait ProgressSink {
    fn emit(&mut self, message: &str);

    /// Final `Error: ...` line of a failed run. Defaults to a normal message.
    fn fail(&mut self, message: &str) {
        self.emit(message);
    }
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct LogCollector {
    pub messages: Vec<String>,
}

impl ProgressSink for LogCollector {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Prints each message on the console and keeps a copy.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSink {
    pub messages: Vec<String>,
}

impl ProgressSink for ConsoleSink {
    fn emit(&mut self, message: &str) {
        progress(message);
        self.messages.push(message.to_string());
    }

    /// Recorded only: the binary reports the error itself on stderr.
    fn fail(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _message: &str) {}
}
