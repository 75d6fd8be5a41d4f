//! Core logging types: severities, recorded entries, and the [`Log`] trait.

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Trace detail, never shown on the console by default.
    Debug,
    /// Informational output such as version and help text.
    Info,
    /// A recoverable problem; a fallback value was used.
    Warn,
    /// An error that ends resolution.
    Error,
}

/// A diagnostic recorded by a [`Log`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity of the message.
    pub severity: Severity,
    /// Message text.
    pub message: String,
}

impl LogEntry {
    pub(super) fn new(severity: Severity, message: &str) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }
}

/// Abstraction over diagnostic sinks.
///
/// [`Logger`](super::logger::Logger) sends messages to the terminal and the
/// log file; [`ScriptLog`](super::script::ScriptLog) captures them for the
/// script result. Resolution code only sees this trait.
pub trait Log: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (trace file only unless the console filter allows it).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
