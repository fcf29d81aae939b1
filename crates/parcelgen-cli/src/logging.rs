use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Level used when `RUST_LOG` is unset; keeps normal runs silent.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, thiserror::Error)]
#[error("logging error: {0}")]
pub struct LoggingError(String);

/// Install JSON logging on stderr so stdout carries only package ids.
pub fn init_logging() -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| LoggingError(err.to_string()))?;

    Ok(())
}
