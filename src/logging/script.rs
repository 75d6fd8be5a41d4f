//! Diagnostic sink for scripted builds.
use std::sync::Mutex;

use super::types::{Log, LogEntry, Severity};

/// Implement the methods of [`Log`] by capturing each message as a
/// [`LogEntry`] of the given severity. The message is also traced so the
/// trace file keeps a complete record.
macro_rules! capture_log_methods {
    ($($method:ident => $severity:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                tracing::debug!(target: "emu3270::script", "{msg}");
                if let Ok(mut guard) = self.entries.lock() {
                    guard.push(LogEntry::new(Severity::$severity, msg));
                }
            }
        )+
    };
}

/// Logger that redirects output into the script result.
///
/// A scripted front end must not write free-form text to the terminal: its
/// stdout is the protocol channel to the controlling script. Everything
/// logged here is held until [`ScriptLog::result`] turns it into a result
/// block.
#[derive(Debug, Default)]
pub struct ScriptLog {
    entries: Mutex<Vec<LogEntry>>,
}

/// The captured output of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptResult {
    /// Data lines, in the order they were logged.
    pub lines: Vec<String>,
    /// `false` if any warning or error was captured.
    pub success: bool,
}

impl ScriptResult {
    /// Render as `data: <line>` lines followed by `ok` or `error`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str("data: ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(if self.success { "ok" } else { "error" });
        out.push('\n');
        out
    }
}

impl ScriptLog {
    /// Create an empty script log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the script result from everything captured so far.
    ///
    /// Debug entries are traced but never become data lines. Multi-line
    /// messages produce one data line per line.
    #[must_use]
    pub fn result(&self) -> ScriptResult {
        let entries = self.entries.lock().map_or_else(|_| vec![], |g| g.clone());
        let success = !entries.iter().any(|e| e.severity >= Severity::Warn);
        let lines = entries
            .iter()
            .filter(|e| e.severity > Severity::Debug)
            .flat_map(|e| e.message.lines().map(String::from).collect::<Vec<_>>())
            .collect();
        ScriptResult { lines, success }
    }
}

impl Log for ScriptLog {
    capture_log_methods! {
        info  => Info,
        debug => Debug,
        warn  => Warn,
        error => Error,
    }
}
