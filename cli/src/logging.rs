//! Logging initialization: stderr always, plus a daily log file when `TRIPTYCH_LOG_DIR` is set.
//!
//! - **RUST_LOG**: filter, e.g. `info`, `triptych=debug`. Default `warn`, or
//!   `triptych=debug,serve=debug,cli=debug` with `--verbose`.
//! - **TRIPTYCH_LOG_DIR**: directory for `triptych.log.YYYY-MM-DD` (plain text, no ANSI).
//!
//! Stdout is left for `run` output only.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const ENV_LOG_DIR: &str = "TRIPTYCH_LOG_DIR";

const LOG_FILE_PREFIX: &str = "triptych.log";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "warn,triptych=debug,serve=debug,cli=debug"
        } else {
            "warn"
        })
    })
}

/// Installs the global subscriber. Keep the returned guard alive until exit so the
/// file writer flushes.
pub fn init(verbose: bool) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter(verbose));

    let log_dir = std::env::var(ENV_LOG_DIR)
        .ok()
        .filter(|s| !s.trim().is_empty());
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(env_filter(verbose));
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .try_init()?;
            tracing::info!(dir = %dir, "logging to file");
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).try_init()?;
            Ok(None)
        }
    }
}
