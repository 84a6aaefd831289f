//! Logging setup.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

/// Initialise logging. With `debug` the default level is `debug` and the
/// `RUST_LOG` environment variable may override it; otherwise the level is
/// forced to `info` so a stray environment variable cannot make the listener
/// chatty. With a file path the log is appended there instead of stderr.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let file_name = path
                .file_name()
                .map(Path::new)
                .unwrap_or_else(|| Path::new("translator.log"))
                .to_path_buf();
            let appender = tracing_appender::rolling::never(dir, file_name);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(appender)
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}
