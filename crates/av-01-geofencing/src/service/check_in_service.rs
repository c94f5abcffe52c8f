//! Check-In Service
//!
//! Orchestrates location acquisition and geofence validation.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{Coordinate, Locale};
use tracing::{debug, info, warn};

use crate::domain::{GeofenceValidator, SiteRegistry, ValidationResult};
use crate::error::CheckInError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{CheckInApi, GeofenceApi, LocationProvider};

/// Check-in service implementation
///
/// Implements `CheckInApi` and `GeofenceApi` using an injected location
/// provider and a validator bound to the configured registry.
pub struct CheckInService<L: LocationProvider> {
    /// Location source (driven port)
    location: Arc<L>,
    /// Validator over the site registry
    validator: GeofenceValidator,
    /// Outcome counters
    metrics: Arc<dyn MetricsRecorder>,
}

impl<L: LocationProvider> CheckInService<L> {
    /// Create a new service with metrics disabled
    pub fn new(location: Arc<L>, validator: GeofenceValidator) -> Self {
        Self {
            location,
            validator,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Create with a metrics recorder
    pub fn with_metrics(
        location: Arc<L>,
        validator: GeofenceValidator,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Self {
        Self {
            location,
            validator,
            metrics,
        }
    }

    /// Locale used for both result and failure messages
    pub fn locale(&self) -> Locale {
        self.validator.locale()
    }

    /// Validate a coordinate the caller already holds.
    pub fn validate_coordinate(&self, current: Coordinate) -> ValidationResult {
        let result = self.validator.check(current);
        self.metrics
            .record_check(result.is_valid, result.distance_meters);

        if result.is_valid {
            info!(
                site = result.matched_site_name.as_deref().unwrap_or_default(),
                distance_m = result.distance_meters,
                "[CheckInService] Position admitted"
            );
        } else {
            debug!(
                nearest = result.nearest_site_name.as_deref().unwrap_or_default(),
                distance_m = result.distance_meters,
                "[CheckInService] Position outside every authorized site"
            );
        }

        result
    }
}

#[async_trait]
impl<L: LocationProvider + 'static> CheckInApi for CheckInService<L> {
    async fn check_in(&self) -> Result<ValidationResult, CheckInError> {
        let current = match self.location.current_location().await {
            Ok(coordinate) => coordinate,
            Err(err) => {
                self.metrics.record_acquisition_failure();
                warn!(error = %err, "[CheckInService] Location acquisition failed");
                return Err(CheckInError::Acquisition(err));
            }
        };

        debug!(
            latitude = current.latitude,
            longitude = current.longitude,
            sites = self.validator.registry().len(),
            "[CheckInService] Validating position"
        );

        Ok(self.validate_coordinate(current))
    }
}

impl<L: LocationProvider> GeofenceApi for CheckInService<L> {
    fn validate(&self, current: Coordinate) -> ValidationResult {
        self.validate_coordinate(current)
    }

    fn registry(&self) -> &SiteRegistry {
        self.validator.registry()
    }
}
