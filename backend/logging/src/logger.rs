//! Structured Logger
//!
//! Wraps `tracing` with a human-readable stderr layer, an optional daily
//! rolling NDJSON file layer, and environment-based level control.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log file name prefix; the appender adds a `.YYYY-MM-DD` suffix.
const LOG_FILE_PREFIX: &str = "tutorforge.log";

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global structured logger.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// When `log_dir` is set, JSON lines are also appended to a daily rolling file.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logger(log_dir: Option<&Path>, level: &str) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(console_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_directory() {
        let dir = std::env::temp_dir().join(format!("tutorforge-log-{}", std::process::id()));
        init_logger(Some(&dir), "debug").unwrap();
        assert!(dir.is_dir());
        tracing::info!("logger smoke test");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
