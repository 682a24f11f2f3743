use std::io::IsTerminal;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Log file named by this variable receives all tracing output.
const LOG_FILE_ENV: &str = "ASCIIMATE_LOG";
/// Filter directives, checked before `RUST_LOG`.
const LOG_LEVEL_ENV: &str = "ASCIIMATE_LOG_LEVEL";

/// Keeps the non-blocking log writer alive; flushes on drop.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The full-screen player owns the terminal and no log file was named.
    Discard,
}

fn log_target(log_file: Option<PathBuf>, terminal_ui: bool) -> LogTarget {
    match log_file {
        Some(path) => LogTarget::File(path),
        None if terminal_ui => LogTarget::Discard,
        None => LogTarget::Stderr,
    }
}

pub fn init_tracing(default_level: &str, terminal_ui: bool) -> TelemetryGuard {
    let env_filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, guard, ansi) = match log_target(log_file_path_from_env(), terminal_ui) {
        LogTarget::File(path) => match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                (BoxMakeWriter::new(non_blocking), Some(guard), false)
            }
            Err(err) => {
                eprintln!(
                    "Warning: failed to open log file {}: {}",
                    path.display(),
                    err
                );
                if terminal_ui {
                    discard_writer()
                } else {
                    stderr_writer()
                }
            }
        },
        LogTarget::Stderr => stderr_writer(),
        LogTarget::Discard => discard_writer(),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard { _guard: guard }
}

fn stderr_writer() -> (BoxMakeWriter, Option<WorkerGuard>, bool) {
    (
        BoxMakeWriter::new(std::io::stderr),
        None,
        std::io::stderr().is_terminal(),
    )
}

fn discard_writer() -> (BoxMakeWriter, Option<WorkerGuard>, bool) {
    (BoxMakeWriter::new(std::io::sink), None, false)
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_ui_without_log_file_discards() {
        assert_eq!(log_target(None, true), LogTarget::Discard);
        assert_eq!(log_target(None, false), LogTarget::Stderr);
    }

    #[test]
    fn test_log_file_wins_in_every_mode() {
        let path = PathBuf::from("/tmp/asciimate.log");
        assert_eq!(
            log_target(Some(path.clone()), true),
            LogTarget::File(path.clone())
        );
        assert_eq!(log_target(Some(path.clone()), false), LogTarget::File(path));
    }
}
