use std::{
    fs::OpenOptions,
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter, e.g. `ZEN_LOG=zen=debug`.
pub const LOG_ENV: &str = "ZEN_LOG";
const DEFAULT_FILTER: &str = "warn";

pub enum LogTarget<'a> {
    Stderr,
    /// Appends to a file; used when the terminal belongs to the full-screen UI.
    File(&'a Path),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns false if logging could not be set up;
/// the tracker runs fine without it.
pub fn init(target: LogTarget<'_>) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(filter());
    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return false;
                }
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(_) => return false,
            }
        }
    };
    result.is_ok()
}
