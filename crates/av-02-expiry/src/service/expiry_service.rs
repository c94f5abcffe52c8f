//! Expiry Service
//!
//! Binds a validity window to a clock.

use shared_types::Timestamp;
use tracing::debug;

use crate::domain::ValidityWindow;
use crate::error::ExpiryError;
use crate::ports::{ExpiryApi, SystemTimeSource, TimeSource};

/// Expiry service implementation
///
/// Implements `ExpiryApi` with an injected `TimeSource`, so tests can pin
/// "now" while production reads the wall clock.
pub struct ExpiryService<T: TimeSource = SystemTimeSource> {
    window: ValidityWindow,
    time_source: T,
}

impl ExpiryService<SystemTimeSource> {
    /// Service over the wall clock.
    pub fn with_system_clock(window: ValidityWindow) -> Result<Self, ExpiryError> {
        Self::new(window, SystemTimeSource)
    }
}

impl<T: TimeSource> ExpiryService<T> {
    /// Create a service, validating the window.
    pub fn new(window: ValidityWindow, time_source: T) -> Result<Self, ExpiryError> {
        window.validate()?;
        Ok(Self {
            window,
            time_source,
        })
    }

    pub fn window(&self) -> ValidityWindow {
        self.window
    }

    pub fn time_source(&self) -> &T {
        &self.time_source
    }
}

impl<T: TimeSource> ExpiryApi for ExpiryService<T> {
    fn is_expired(&self, issued_at: Timestamp) -> bool {
        self.is_expired_at(issued_at, self.time_source.now())
    }

    fn is_expired_at(&self, issued_at: Timestamp, now: Timestamp) -> bool {
        let expired = self.window.is_expired(issued_at, now);
        if expired {
            debug!(
                issued_at,
                now,
                window_minutes = self.window.minutes,
                "[ExpiryService] Timestamp outside validity window"
            );
        }
        expired
    }

    fn remaining_minutes(&self, issued_at: Timestamp) -> f64 {
        self.window
            .remaining_minutes(issued_at, self.time_source.now())
    }
}
