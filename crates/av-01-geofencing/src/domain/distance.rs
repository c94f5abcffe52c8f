//! Great-circle distance
//!
//! Haversine formula over a spherical Earth. The radius constant is fixed so
//! that every client computes the same meters for the same pair of points;
//! do not swap in an ellipsoidal model.

use std::f64::consts::PI;

use shared_types::Coordinate;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance between `a` and `b`, in meters.
///
/// Symmetric in its arguments and exactly `0.0` for identical inputs.
/// Always finite and non-negative for finite inputs.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude * PI / 180.0;
    let phi2 = b.latitude * PI / 180.0;
    let delta_phi = (b.latitude - a.latitude) * PI / 180.0;
    let delta_lambda = (b.longitude - a.longitude) * PI / 180.0;

    let sin_half_phi = (delta_phi / 2.0).sin();
    let sin_half_lambda = (delta_lambda / 2.0).sin();

    let hav = sin_half_phi * sin_half_phi
        + phi1.cos() * phi2.cos() * sin_half_lambda * sin_half_lambda;
    // Rounding can push hav just past 1 for antipodal points.
    let hav = hav.clamp(0.0, 1.0);

    let c = 2.0 * hav.sqrt().atan2((1.0 - hav).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Distance calculator component.
///
/// Stateless; exists so callers can hold "the distance function" as a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceCalculator;

impl DistanceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Distance in meters between two coordinates.
    #[inline]
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        haversine_distance(a, b)
    }
}
