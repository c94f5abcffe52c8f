//! # AV-01 Geofencing
//!
//! Decides whether a device position lies inside an authorized work site.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `haversine_distance`: great-circle distance on a 6,371 km sphere
//!   - `SiteRegistry`: validated, ordered, non-empty list of sites
//!   - `GeofenceValidator`: two-pass admission / nearest-site evaluation
//!   - `GeofenceConfig`: JSON configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `GeofenceApi`, `CheckInApi`: Driving ports
//!   - `LocationProvider`: Driven port (device location)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `CheckInService`: acquire position, validate, log, count
//!
//! ## Invariants
//!
//! - The radius boundary is inclusive: `distance == radius` is inside.
//! - The first admitting site in registry order wins, even if a later one is
//!   closer.
//! - On rejection the reported site is the true nearest over all sites.
//! - Reported distances are `round(raw)` meters.
//! - An empty registry is a configuration error, never "no match".
//!
//! ## Usage Example
//!
//! ```ignore
//! use av_01_geofencing::{GeofenceConfig, GeofenceApi};
//! use shared_types::Coordinate;
//!
//! let validator = GeofenceConfig::default().into_validator()?;
//! let result = validator.validate(Coordinate::new(-23.4351, -47.368)?);
//! if result.is_valid {
//!     println!("checked in at {:?}", result.matched_site_name);
//! }
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    default_registry, haversine_distance, validate, DistanceCalculator, GeofenceConfig,
    GeofenceValidator, Site, SiteRegistry, SiteRegistryBuilder, ValidationResult,
    EARTH_RADIUS_METERS,
};
pub use error::{CheckInError, GeofenceError};
pub use metrics::{GeofenceMetrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{CheckInApi, GeofenceApi, LocationProvider};
pub use service::CheckInService;
