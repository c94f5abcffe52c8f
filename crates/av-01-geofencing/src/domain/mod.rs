//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Haversine distance
//! - Sites and the validated site registry
//! - Two-pass geofence validation
//! - Validation results and their messages
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod distance;
pub mod result;
pub mod site;
pub mod validator;

pub use config::{
    default_registry, GeofenceConfig, DEFAULT_SITE_RADIUS_METERS, FATEC_VOTORANTIM,
    FATEC_VOTORANTIM_CENTER,
};
pub use distance::{haversine_distance, DistanceCalculator, EARTH_RADIUS_METERS};
pub use result::{round_meters, ValidationResult};
pub use site::{validate_sites, Site, SiteRegistry, SiteRegistryBuilder};
pub use validator::{
    first_admitting_site, nearest_site, validate, validate_with_locale, GeofenceValidator,
};
