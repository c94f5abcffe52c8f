//! Authorized sites and the site registry
//!
//! # Example
//!
//! ```ignore
//! use av_01_geofencing::domain::SiteRegistryBuilder;
//! use shared_types::Coordinate;
//!
//! let registry = SiteRegistryBuilder::new()
//!     .site("Fatec Votorantim", Coordinate::new_unchecked(-23.439583, -47.368), 1000.0)
//!     .build()?;
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::Coordinate;

use crate::error::GeofenceError;

/// A registered authorized location with a circular admission area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unique name within the registry
    pub name: String,
    /// Center of the admission circle
    pub center: Coordinate,
    /// Admission radius in meters (inclusive)
    pub radius_meters: f64,
}

impl Site {
    pub fn new(name: impl Into<String>, center: Coordinate, radius_meters: f64) -> Self {
        Self {
            name: name.into(),
            center,
            radius_meters,
        }
    }

    /// Check the per-site invariants: valid center, finite positive radius.
    pub fn validate(&self) -> Result<(), GeofenceError> {
        self.center.validate()?;
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(GeofenceError::InvalidRadius {
                site: self.name.clone(),
                radius: self.radius_meters,
            });
        }
        Ok(())
    }
}

/// Check a site list against the registry rules: non-empty, every site
/// valid, names unique.
pub fn validate_sites(sites: &[Site]) -> Result<(), GeofenceError> {
    if sites.is_empty() {
        return Err(GeofenceError::EmptyRegistry);
    }

    let mut seen = HashSet::with_capacity(sites.len());
    for site in sites {
        site.validate()?;
        if !seen.insert(site.name.as_str()) {
            return Err(GeofenceError::DuplicateSite(site.name.clone()));
        }
    }

    Ok(())
}

/// Ordered, non-empty, read-only collection of sites.
///
/// Order is significant: it is the tie-break order for admission.
/// Once built, a registry is never mutated; share it behind an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    /// Validate and wrap a list of sites.
    pub fn new(sites: Vec<Site>) -> Result<Self, GeofenceError> {
        validate_sites(&sites)?;
        Ok(Self { sites })
    }

    /// Wrap sites that are known to be valid at compile time.
    pub(crate) fn from_trusted(sites: Vec<Site>) -> Self {
        debug_assert!(!sites.is_empty());
        Self { sites }
    }

    /// Sites in registry order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns `false` for every registry built through `new`.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// First site and the remainder. Never fails: the registry is non-empty.
    pub fn split_first(&self) -> (&Site, &[Site]) {
        (&self.sites[0], &self.sites[1..])
    }

    pub fn get(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }
}

impl<'a> IntoIterator for &'a SiteRegistry {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

/// Fluent builder for `SiteRegistry`.
///
/// Sites keep the order in which they are added.
#[derive(Default)]
pub struct SiteRegistryBuilder {
    sites: Vec<Site>,
}

impl SiteRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a site.
    pub fn site(mut self, name: impl Into<String>, center: Coordinate, radius_meters: f64) -> Self {
        self.sites.push(Site::new(name, center, radius_meters));
        self
    }

    /// Append an already constructed site.
    pub fn push(mut self, site: Site) -> Self {
        self.sites.push(site);
        self
    }

    /// Build the registry, validating every site.
    pub fn build(self) -> Result<SiteRegistry, GeofenceError> {
        SiteRegistry::new(self.sites)
    }
}
