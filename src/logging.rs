//! Logging bootstrap.
//!
//! User-facing progress goes to stdout through `println!`. Diagnostic records
//! go through the `log` facade to stderr via `flexi_logger`.
//!
//! # Invariants
//! - Logging init is idempotent.
//! - Logging initialization must not panic.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

/// Level used by the binary when nothing else is requested.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts the stderr logger with the given level spec (e.g. `"warn"`,
/// `"life_patterns=debug"`).
///
/// Repeated calls after a successful start are no-ops.
///
/// # Errors
/// - Returns an error when `level` is not a valid log spec.
/// - Returns an error when the logger backend cannot be started.
pub fn init_logging(level: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| -> Result<LoggerHandle, String> {
            let handle = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;

            info!(
                "event=app_start module=logging status=ok level={} version={}",
                level,
                crate::crate_version()
            );
            Ok(handle)
        })
        .map(|_| ())
}
