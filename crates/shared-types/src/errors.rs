//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

use crate::entities::Locale;

/// A latitude/longitude pair outside the valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude outside `[-90, 90]` or not finite.
    #[error("Latitude out of range: {0} not within [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` or not finite.
    #[error("Longitude out of range: {0} not within [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// The device could not produce a coordinate.
///
/// Raised by location providers before any geofence check runs. Callers must
/// surface it as a hard stop, distinct from "outside every site".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    /// The user refused (or revoked) location permission.
    #[error("Location permission denied")]
    PermissionDenied,

    /// The sensor is off, absent, or reported a failure.
    #[error("Location sensor unavailable: {0}")]
    SensorUnavailable(String),

    /// No fix arrived within the provider's deadline.
    #[error("Timed out waiting for a location fix")]
    Timeout,
}

impl AcquisitionError {
    /// User-facing text for this failure.
    pub fn user_message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Self::PermissionDenied, Locale::PtBr) => {
                "Permissão de localização negada. Habilite o acesso à localização para registrar presença.".to_string()
            }
            (Self::PermissionDenied, Locale::En) => {
                "Location permission denied. Enable location access to record attendance.".to_string()
            }
            (Self::SensorUnavailable(_), Locale::PtBr) => {
                "Não foi possível obter sua localização. Verifique se o GPS está ativado.".to_string()
            }
            (Self::SensorUnavailable(_), Locale::En) => {
                "Could not obtain your location. Check that GPS is turned on.".to_string()
            }
            (Self::Timeout, Locale::PtBr) => {
                "A localização demorou demais para responder. Tente novamente.".to_string()
            }
            (Self::Timeout, Locale::En) => {
                "Getting your location took too long. Please try again.".to_string()
            }
        }
    }
}
