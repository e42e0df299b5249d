use std::path::Path;
use std::sync::OnceLock;

use anyhow::{anyhow, Context};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the process-wide subscriber: console output plus a daily rolling file
/// `<log_dir>/<app_name>.<date>.log`.
///
/// `RUST_LOG` overrides `base_level` when set. Fails if logging was already initialized.
pub fn setup_logging(
    app_name: &str,
    base_level: &str,
    log_dir: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let log_dir = log_dir.as_ref();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .with_context(|| format!("Invalid log filter: {base_level}"))?;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(5)
        .build(log_dir)
        .context("Failed to create log file appender")?;

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow!("Logging already initialized"))?;

    let console_writer = std::io::stdout.and(std::io::stderr.with_min_level(Level::WARN));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .with_writer(console_writer);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Logger initialization failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let dir = std::env::temp_dir().join("medianstack_log_setup_test");
        let err = setup_logging("test", "medianstack=loud", &dir).unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"));
    }
}
