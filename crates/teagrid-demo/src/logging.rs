//! Tracing setup.
//!
//! `TEAGRID_LOG` takes an `EnvFilter` directive and wins over `-v`. With
//! `--print` logs go to stderr. Interactive sessions log only to `--log-file`
//! because the grid owns the terminal.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TEAGRID_LOG";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber.
pub fn init(default_level: &str, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false);

    match (log_file, interactive) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        (None, false) => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        (None, true) => {}
    }

    Ok(())
}
