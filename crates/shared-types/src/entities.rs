//! # Core Domain Entities
//!
//! - **Position**: `Coordinate`
//! - **Time**: `Timestamp`
//! - **Presentation**: `Locale`

use serde::{Deserialize, Serialize};

use crate::errors::CoordinateError;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Number of milliseconds in one minute.
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;

// =============================================================================
// POSITION
// =============================================================================

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`;
    /// NaN and infinities are rejected by the same range checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a coordinate without validation. Use with trusted inputs only.
    #[inline]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Re-runs the range checks on an already constructed value.
    ///
    /// Deserialized coordinates bypass `new`, so configuration loaders call
    /// this before trusting them.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        Self::new(self.latitude, self.longitude).map(|_| ())
    }
}

// =============================================================================
// PRESENTATION
// =============================================================================

/// Language used for user-facing messages.
///
/// Message text is presentation content. Callers must branch on result
/// fields, never on the rendered strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English.
    #[serde(rename = "en")]
    En,
}
