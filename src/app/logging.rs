//! Logging setup
//!
//! The terminal belongs to the editor while it runs, so logs never go to
//! stdout or stderr. Set `DOLL_LOG` to a file path to collect them there;
//! `RUST_LOG` picks the filter as usual.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "DOLL_LOG";

/// Install the global subscriber if `DOLL_LOG` is set
///
/// Returns whether logging was enabled.
pub fn init() -> std::io::Result<bool> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => {
            init_with_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Install the global subscriber, appending to `path`
pub fn init_with_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))?;

    Ok(())
}
