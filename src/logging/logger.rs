//! Terminal logger that also keeps a history of every diagnostic.
use std::sync::Mutex;

use super::types::{Log, LogEntry, Severity};

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger for interactive builds.
///
/// Every message becomes a [`tracing`] event, so it reaches the console and
/// the trace file through the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber). Messages are also
/// kept in memory so callers can ask whether any error output was produced.
#[derive(Debug, Default)]
pub struct Logger {
    entries: Mutex<Vec<LogEntry>>,
}

impl Logger {
    /// Create a new logger with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, severity: Severity, msg: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(LogEntry::new(severity, msg));
        }
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        self.record(Severity::Error, msg);
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.record(Severity::Warn, msg);
        tracing::warn!("{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        self.record(Severity::Info, msg);
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        self.record(Severity::Debug, msg);
        tracing::debug!("{msg}");
    }

    /// Return a clone of every recorded entry.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Return the messages recorded at exactly `severity`.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries.lock().map_or_else(
            |_| vec![],
            |g| {
                g.iter()
                    .filter(|e| e.severity == severity)
                    .map(|e| e.message.clone())
                    .collect()
            },
        )
    }

    /// Return `true` if any warning or error was logged.
    #[must_use]
    pub fn any_error_output(&self) -> bool {
        self.entries
            .lock()
            .is_ok_and(|g| g.iter().any(|e| e.severity >= Severity::Warn))
    }
}

impl Log for Logger {
    forward_log_methods!(info, debug, warn, error);
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::isolated_logger;
    use std::fs;

    #[test]
    fn logger_new_is_empty() {
        let log = Logger::new();
        assert!(log.entries().is_empty());
        assert!(!log.any_error_output());
    }

    #[test]
    fn entries_preserve_order_and_severity() {
        let log = Logger::new();
        log.info("one");
        log.warn("two");
        log.debug("three");
        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].severity, Severity::Info);
        assert_eq!(entries[1].message, "two");
        assert_eq!(entries[2].severity, Severity::Debug);
    }

    #[test]
    fn any_error_output_counts_warnings() {
        let log = Logger::new();
        log.info("fine");
        log.debug("fine");
        assert!(!log.any_error_output());
        log.warn("not fine");
        assert!(log.any_error_output());
    }

    #[test]
    fn messages_filters_by_severity() {
        let log = Logger::new();
        log.warn("w1");
        log.error("e1");
        log.warn("w2");
        assert_eq!(log.messages(Severity::Warn), ["w1", "w2"]);
        assert_eq!(log.messages(Severity::Error), ["e1"]);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let log = Logger::new();
        let log_ref: &dyn Log = &log;
        log_ref.error("via-trait");
        assert_eq!(log.messages(Severity::Error), ["via-trait"]);
    }

    #[test]
    fn warn_written_to_file() {
        let (log, path, _tmp, _guard) = isolated_logger();
        let marker = format!("warn-marker-{}", std::process::id());
        log.warn(&marker);
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("[warn]"), "warn tag should appear in log file");
        assert!(contents.contains(&marker));
    }

    #[test]
    fn debug_always_written_to_file() {
        let (log, path, _tmp, _guard) = isolated_logger();
        let marker = format!("debug-marker-{}", std::process::id());
        log.debug(&marker);
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("[debug]"));
        assert!(contents.contains(&marker));
    }

    #[test]
    fn error_written_to_file() {
        let (log, path, _tmp, _guard) = isolated_logger();
        let marker = format!("error-marker-{}", std::process::id());
        log.error(&marker);
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("[error]"));
        assert!(contents.contains(&marker));
    }
}
