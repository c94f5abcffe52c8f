//! Inbound (Driving) ports for the Expiry subsystem.
//!
//! Used by the session/token flow to decide whether to force
//! re-authentication.

use shared_types::Timestamp;

/// Expiry decisions against a configured validity window.
pub trait ExpiryApi: Send + Sync {
    /// Whether `issued_at` has expired as of the current instant.
    fn is_expired(&self, issued_at: Timestamp) -> bool;

    /// Whether `issued_at` has expired as of an explicit instant.
    fn is_expired_at(&self, issued_at: Timestamp, now: Timestamp) -> bool;

    /// Minutes left in the window as of the current instant; negative once
    /// expired.
    fn remaining_minutes(&self, issued_at: Timestamp) -> f64;
}
