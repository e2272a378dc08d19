//! Tracing subscriber setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "ems.log";

/// Build the filter: `RUST_LOG` wins, the configured level otherwise.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Daily rolling appender writing `ems.log.<date>` files under `dir`.
///
/// Fails when the directory cannot be created or opened.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}

/// Install the global subscriber.
///
/// Logs go to stdout and, when `log_dir` is given and usable, to a daily
/// rolling file. An unusable directory falls back to stdout only with a
/// warning. The returned guard flushes the file writer and must live until
/// exit.
pub fn init(config: &LoggingConfig, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let mut file_error = None;
    let (file_layer, guard) = match log_dir.map(|dir| (dir, file_appender(dir))) {
        Some((_, Ok(appender))) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        Some((dir, Err(e))) => {
            file_error = Some(format!("{}: {}", dir.display(), e));
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled, could not open log directory {}", e);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "ems=debug,sea_orm=warn".to_string(),
            directory: None,
        };
        let rendered = env_filter(&config).to_string();
        assert!(rendered.contains("ems=debug"));
        assert!(rendered.contains("sea_orm=warn"));
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        assert!(file_appender(&logs).is_ok());
        assert!(logs.is_dir());
    }

    #[test]
    fn test_file_appender_rejects_unusable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        assert!(file_appender(&blocker.join("logs")).is_err());
    }

    // Only test in the crate that installs the global subscriber.
    #[test]
    fn test_init_falls_back_to_console_when_directory_unusable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let guard = init(&LoggingConfig::default(), Some(&blocker.join("logs")));
        assert!(guard.is_none());
    }
}
