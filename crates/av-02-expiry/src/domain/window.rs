//! Validity window configuration

use serde::{Deserialize, Serialize};
use shared_types::{Timestamp, MILLIS_PER_MINUTE};

use crate::domain::expiry::{elapsed_minutes, is_expired};
use crate::error::ExpiryError;

/// Validity used when nothing else is configured, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: f64 = 60.0;

/// How long an issued timestamp stays usable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// Window length in (possibly fractional) minutes
    pub minutes: f64,
}

impl Default for ValidityWindow {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }
}

impl ValidityWindow {
    /// Create a validated window.
    pub fn new(minutes: f64) -> Result<Self, ExpiryError> {
        let window = Self { minutes };
        window.validate()?;
        Ok(window)
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: f64::from(minutes),
        }
    }

    /// Reject NaN, infinite and negative windows.
    ///
    /// Deserialized windows bypass `new`; loaders call this explicitly.
    pub fn validate(&self) -> Result<(), ExpiryError> {
        if !self.minutes.is_finite() || self.minutes < 0.0 {
            return Err(ExpiryError::InvalidWindow {
                minutes: self.minutes,
            });
        }
        Ok(())
    }

    /// Whether `issued_at` has outlived this window at `now`.
    pub fn is_expired(&self, issued_at: Timestamp, now: Timestamp) -> bool {
        is_expired(issued_at, self.minutes, now)
    }

    /// Epoch milliseconds at which the window closes. Still valid at that
    /// exact instant.
    pub fn expires_at(&self, issued_at: Timestamp) -> f64 {
        issued_at as f64 + self.minutes * MILLIS_PER_MINUTE
    }

    /// Minutes left before the window closes; negative once exceeded.
    ///
    /// For countdown display. `is_expired` is the authoritative decision.
    pub fn remaining_minutes(&self, issued_at: Timestamp, now: Timestamp) -> f64 {
        self.minutes - elapsed_minutes(issued_at, now)
    }
}
