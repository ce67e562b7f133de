//! Logging utilities
//!
//! Subscriber installation and structured security events.

pub mod security_logger;

pub use security_logger::SecurityLogger;

use crate::config::LoggingConfig;
use crate::utils::error::{ConsoleError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Events go to stderr
/// so stdout stays reserved for command output.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConsoleError::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ConsoleError::config(format!("Failed to install logger: {}", e)))
}
