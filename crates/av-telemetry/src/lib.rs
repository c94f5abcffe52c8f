//! # AV Telemetry
//!
//! Structured logging for the validation subsystems.
//!
//! Library crates only emit `tracing` events; the host binary (or a test
//! harness) installs a subscriber once with [`init_tracing`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use av_telemetry::{init_tracing, TelemetryConfig};
//!
//! init_tracing(&TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `AV_JSON_LOGS` | `false` | Emit JSON lines instead of pretty text |
//! | `AV_SERVICE_NAME` | `attendance-validation` | Service name on the startup event |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid log filter: {0}")]
    Filter(String),
}
