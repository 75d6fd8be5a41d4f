//! Diagnostic sinks and the tracing setup behind them.

mod logger;
mod script;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use script::{ScriptLog, ScriptResult};
pub use subscriber::init_subscriber;
pub use types::{Log, LogEntry, Severity};

/// Create a Logger whose tracing events reach a [`FileLayer`] writing into a
/// fresh temporary directory.
///
/// Returns the trace file path and a
/// [`tracing::dispatcher::DefaultGuard`] that must be kept alive for the
/// duration of the test; dropping it restores the previous thread-local
/// dispatcher.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn isolated_logger() -> (
    Logger,
    std::path::PathBuf,
    tempfile::TempDir,
    tracing::dispatcher::DefaultGuard,
) {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("test.log");
    let file_layer = subscriber::FileLayer::open(&path).expect("failed to create file layer");
    let subscriber =
        tracing_subscriber::registry().with(file_layer.with_filter(LevelFilter::DEBUG));
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
    (Logger::new(), path, tmp, guard)
}
