//! media_view logging & crash reporting
//!
//! Provides structured logging and a panic hook that writes crash reports.

mod panic_hook;
mod logging;

pub use panic_hook::init_panic_hook;
pub use logging::{init_logging, cleanup_old_logs, cleanup_logs_in};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::path::PathBuf;
use directories::ProjectDirs;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("org", "media_view", "media_view")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize logging and the panic hook.
///
/// `default_level` is used when `RUST_LOG` is not set. The returned guard
/// flushes the file appender on drop and must be held until exit.
pub fn init(default_level: &str) -> anyhow::Result<WorkerGuard> {
    let guard = init_logging(default_level)?;
    init_panic_hook();
    Ok(guard)
}
