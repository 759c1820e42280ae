//! LuminaLens logging & crash reporting
//!
//! Structured logging through `tracing`, a crash-report panic hook and,
//! in debug builds, a background deadlock detector.

mod logging;
mod panic_hook;

pub use logging::{cleanup_logs_in, cleanup_old_logs, init_logging, LogGuard};
pub use panic_hook::init_panic_hook;

use directories::ProjectDirs;
use std::path::PathBuf;

/// Directory that receives the rolling JSON log files
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("com", "LuminaLens", "LuminaLens")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize logging, the panic hook and (debug only) the deadlock detector.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the process.
pub fn init() -> anyhow::Result<LogGuard> {
    let guard = init_logging()?;
    init_panic_hook();

    #[cfg(debug_assertions)]
    init_deadlock_detector();

    Ok(guard)
}

#[cfg(debug_assertions)]
fn init_deadlock_detector() {
    use std::thread;
    use std::time::Duration;

    let spawned = thread::Builder::new()
        .name("deadlock-detector".into())
        .spawn(|| loop {
            thread::sleep(Duration::from_secs(10));
            let deadlocks = parking_lot::deadlock::check_deadlock();
            if deadlocks.is_empty() {
                continue;
            }
            tracing::error!(count = deadlocks.len(), "Deadlock detected");
            for (i, threads) in deadlocks.iter().enumerate() {
                for t in threads {
                    tracing::error!(cycle = i, thread = ?t.thread_id(), "{:#?}", t.backtrace());
                }
            }
        });

    if let Err(e) = spawned {
        tracing::warn!("Deadlock detector not started: {}", e);
    }
}
