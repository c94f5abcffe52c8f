//! Inbound Ports (Driving Ports)
//!
//! These traits define the API that callers (the location-acquisition flow,
//! presentation code) use to interact with the Geofencing subsystem.

use async_trait::async_trait;
use shared_types::Coordinate;

use crate::domain::{GeofenceValidator, SiteRegistry, ValidationResult};
use crate::error::CheckInError;

/// Synchronous geofence check against a configured registry.
pub trait GeofenceApi: Send + Sync {
    /// Validate an already acquired coordinate.
    ///
    /// Never called with a missing coordinate: acquisition failures are
    /// handled by the caller before this point.
    fn validate(&self, current: Coordinate) -> ValidationResult;

    /// The registry this API validates against.
    fn registry(&self) -> &SiteRegistry;
}

impl GeofenceApi for GeofenceValidator {
    fn validate(&self, current: Coordinate) -> ValidationResult {
        self.check(current)
    }

    fn registry(&self) -> &SiteRegistry {
        GeofenceValidator::registry(self)
    }
}

/// Full check-in flow: acquire the position, then validate it.
#[async_trait]
pub trait CheckInApi: Send + Sync {
    /// Acquire the device position and validate it.
    ///
    /// # Returns
    /// - `Ok(result)`: a coordinate was obtained; `result.is_valid` says
    ///   whether it lies inside an authorized site
    /// - `Err(CheckInError::Acquisition)`: no coordinate; nothing was validated
    async fn check_in(&self) -> Result<ValidationResult, CheckInError>;
}
