//! Geofence configuration
//!
//! The site registry is configuration: loaded once at startup, validated,
//! then shared read-only.
//!
//! ```ignore
//! let config = GeofenceConfig::from_json_str(r#"{
//!     "locale": "pt-BR",
//!     "sites": [
//!         {
//!             "name": "Fatec Votorantim",
//!             "center": { "latitude": -23.439583, "longitude": -47.368 },
//!             "radius_meters": 1000.0
//!         }
//!     ]
//! }"#)?;
//! let validator = config.into_validator()?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared_types::{Coordinate, Locale};

use crate::domain::site::{Site, SiteRegistry};
use crate::domain::validator::GeofenceValidator;
use crate::error::GeofenceError;

/// Name of the campus site shipped as the default registry.
pub const FATEC_VOTORANTIM: &str = "Fatec Votorantim";

/// Center of the Fatec Votorantim campus.
pub const FATEC_VOTORANTIM_CENTER: Coordinate = Coordinate::new_unchecked(-23.439583, -47.368);

/// Admission radius of the default site, in meters.
pub const DEFAULT_SITE_RADIUS_METERS: f64 = 1000.0;

/// Deserializable geofence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    /// Authorized sites, in tie-break order
    pub sites: Vec<Site>,
    /// Language for result messages
    #[serde(default)]
    pub locale: Locale,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            sites: vec![default_site()],
            locale: Locale::default(),
        }
    }
}

impl GeofenceConfig {
    /// Parse configuration from JSON. Does not validate the sites.
    pub fn from_json_str(json: &str) -> Result<Self, GeofenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the sites into a registry.
    pub fn into_registry(self) -> Result<SiteRegistry, GeofenceError> {
        SiteRegistry::new(self.sites)
    }

    /// Validate and build a validator with the configured locale.
    pub fn into_validator(self) -> Result<GeofenceValidator, GeofenceError> {
        let locale = self.locale;
        let registry = self.into_registry()?;
        Ok(GeofenceValidator::new(Arc::new(registry)).with_locale(locale))
    }

    /// Builder-style method to set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

fn default_site() -> Site {
    Site::new(FATEC_VOTORANTIM, FATEC_VOTORANTIM_CENTER, DEFAULT_SITE_RADIUS_METERS)
}

/// The compiled-in registry: the Fatec Votorantim campus only.
pub fn default_registry() -> SiteRegistry {
    SiteRegistry::from_trusted(vec![default_site()])
}
