//! Logging initialization

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

/// Initialize the logging system
///
/// Uses env_logger with a default filter of `warn`; override with `RUST_LOG`.
/// The viewer owns the terminal while it runs, so pass `log_file` to keep log
/// lines from landing on top of the map.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
