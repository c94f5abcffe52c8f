//! Geofence validation
//!
//! Evaluation runs in two distinct passes:
//!
//! 1. **Admission**: scan sites in registry order and stop at the first one
//!    whose radius contains the coordinate (`distance <= radius`). A later,
//!    closer site never overrides an earlier admitting one.
//! 2. **Nearest**: only when nothing admits, scan *all* sites for the minimum
//!    distance, independently of pass 1.
//!
//! Merging the passes into "find the closest site, then compare to its
//! radius" changes the outcome when sites overlap; keep them separate.

use std::sync::Arc;

use shared_types::{Coordinate, Locale};

use crate::domain::distance::haversine_distance;
use crate::domain::result::ValidationResult;
use crate::domain::site::{validate_sites, Site, SiteRegistry};
use crate::error::GeofenceError;

/// Pass 1: the first site, in order, that admits `current`.
///
/// The boundary is inclusive.
pub fn first_admitting_site(current: Coordinate, sites: &[Site]) -> Option<(&Site, f64)> {
    sites.iter().find_map(|site| {
        let distance = haversine_distance(current, site.center);
        (distance <= site.radius_meters).then_some((site, distance))
    })
}

/// Pass 2: the site closest to `current`, regardless of radius.
///
/// On equal distances the earlier site is kept. Returns `None` only for an
/// empty slice.
pub fn nearest_site(current: Coordinate, sites: &[Site]) -> Option<(&Site, f64)> {
    let (first, rest) = sites.split_first()?;
    Some(nearest_of(current, first, rest))
}

fn nearest_of<'a>(current: Coordinate, first: &'a Site, rest: &'a [Site]) -> (&'a Site, f64) {
    let mut best = (first, haversine_distance(current, first.center));

    for site in rest {
        let distance = haversine_distance(current, site.center);
        if distance < best.1 {
            best = (site, distance);
        }
    }

    best
}

/// Validate `current` against `sites` with the default locale.
///
/// `sites` must satisfy the same rules as a `SiteRegistry`: an empty slice,
/// a non-positive radius or a repeated name is a configuration error, never
/// a "no match". A `current` outside the coordinate ranges is rejected with
/// `GeofenceError::InvalidPosition`.
pub fn validate(current: Coordinate, sites: &[Site]) -> Result<ValidationResult, GeofenceError> {
    validate_with_locale(current, sites, Locale::default())
}

/// Validate `current` against `sites`, rendering messages in `locale`.
pub fn validate_with_locale(
    current: Coordinate,
    sites: &[Site],
    locale: Locale,
) -> Result<ValidationResult, GeofenceError> {
    validate_sites(sites)?;
    current.validate().map_err(GeofenceError::InvalidPosition)?;

    if let Some((site, distance)) = first_admitting_site(current, sites) {
        return Ok(ValidationResult::admitted(&site.name, distance, locale));
    }

    let (nearest, distance) = nearest_site(current, sites).ok_or(GeofenceError::EmptyRegistry)?;
    Ok(ValidationResult::rejected(&nearest.name, distance, locale))
}

/// Geofence validator bound to a validated registry.
///
/// The registry is non-empty by construction, so `check` cannot fail.
/// Cheap to clone; the registry is shared.
#[derive(Clone, Debug)]
pub struct GeofenceValidator {
    registry: Arc<SiteRegistry>,
    locale: Locale,
}

impl GeofenceValidator {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self {
            registry,
            locale: Locale::default(),
        }
    }

    /// Builder-style method to set the message locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Run both passes against the bound registry.
    pub fn check(&self, current: Coordinate) -> ValidationResult {
        if let Some((site, distance)) = first_admitting_site(current, self.registry.sites()) {
            return ValidationResult::admitted(&site.name, distance, self.locale);
        }

        let (first, rest) = self.registry.split_first();
        let (nearest, distance) = nearest_of(current, first, rest);
        ValidationResult::rejected(&nearest.name, distance, self.locale)
    }
}
