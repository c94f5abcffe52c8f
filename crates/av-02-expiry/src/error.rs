//! Error types for the Expiry subsystem

use thiserror::Error;

/// Errors raised while configuring a validity window.
///
/// Expiry checks themselves never fail; only building a window from
/// configuration can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpiryError {
    #[error("Invalid validity window: {minutes} minutes (must be finite and >= 0)")]
    InvalidWindow { minutes: f64 },
}
