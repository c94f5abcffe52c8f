//! Error types for the Geofencing subsystem

use shared_types::{AcquisitionError, CoordinateError, Locale};
use thiserror::Error;

/// Configuration errors for the site registry, plus a rejected input position.
///
/// None of these is ever produced for a coordinate that merely lies outside
/// every site; that outcome is a `ValidationResult` with `is_valid == false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeofenceError {
    #[error("No authorized sites configured")]
    EmptyRegistry,

    #[error("Invalid radius for site {site}: {radius} (must be finite and > 0)")]
    InvalidRadius { site: String, radius: f64 },

    #[error("Duplicate site name: {0}")]
    DuplicateSite(String),

    #[error("Invalid site center: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Invalid position: {0}")]
    InvalidPosition(CoordinateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GeofenceError {
    fn from(err: serde_json::Error) -> Self {
        GeofenceError::Config(err.to_string())
    }
}

/// Errors from the check-in flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckInError {
    /// The coordinate could not be obtained; no geofence check was run.
    #[error("Location acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),
}

impl CheckInError {
    /// User-facing text, distinct from any "outside the site" message.
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            CheckInError::Acquisition(err) => err.user_message(locale),
        }
    }
}
