//! Log file setup.
//!
//! The terminal belongs to the UI, so events go to `<data dir>/edr.log`.
//! `EDR_LOG` takes precedence over the configured filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, appending to `edr.log` under `dir`.
pub fn init(dir: &Path, default_filter: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("edr.log"))?;

    let filter = EnvFilter::try_from_env("EDR_LOG")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}
