//! Geofence validation result

use serde::{Deserialize, Serialize};
use shared_types::Locale;

/// Outcome of a geofence check.
///
/// The contract lives in `is_valid`, `matched_site_name`,
/// `nearest_site_name` and `distance_meters`. `message` is presentation text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether some site admitted the coordinate
    pub is_valid: bool,
    /// Human-readable, locale-specific description
    pub message: String,
    /// The admitting site (present iff `is_valid`)
    pub matched_site_name: Option<String>,
    /// The closest site (present iff `!is_valid`)
    pub nearest_site_name: Option<String>,
    /// Rounded distance to the matched site, or to the nearest site on failure
    pub distance_meters: u64,
}

impl ValidationResult {
    /// Coordinate admitted by `site_name`.
    pub fn admitted(site_name: &str, raw_distance: f64, locale: Locale) -> Self {
        let distance_meters = round_meters(raw_distance);
        Self {
            is_valid: true,
            message: admitted_message(site_name, distance_meters, locale),
            matched_site_name: Some(site_name.to_string()),
            nearest_site_name: None,
            distance_meters,
        }
    }

    /// Coordinate outside every site; `nearest_site` is the true closest one.
    pub fn rejected(nearest_site: &str, raw_distance: f64, locale: Locale) -> Self {
        let distance_meters = round_meters(raw_distance);
        Self {
            is_valid: false,
            message: rejected_message(nearest_site, distance_meters, locale),
            matched_site_name: None,
            nearest_site_name: Some(nearest_site.to_string()),
            distance_meters,
        }
    }

    /// Name of the site this result refers to, matched or nearest.
    pub fn site_name(&self) -> Option<&str> {
        self.matched_site_name
            .as_deref()
            .or(self.nearest_site_name.as_deref())
    }
}

/// Round a raw haversine distance to whole meters.
///
/// Halves round up, as distances are never negative.
pub fn round_meters(raw: f64) -> u64 {
    // `as` saturates: NaN maps to 0, huge values to u64::MAX.
    raw.max(0.0).round() as u64
}

fn admitted_message(site: &str, distance: u64, locale: Locale) -> String {
    match locale {
        Locale::PtBr => format!("Localização válida! Você está em {site} ({distance} m do centro)."),
        Locale::En => format!("Location confirmed: you are at {site} ({distance} m from its center)."),
    }
}

fn rejected_message(nearest: &str, distance: u64, locale: Locale) -> String {
    match locale {
        Locale::PtBr => format!(
            "Você não está em um local autorizado. Local mais próximo: {nearest}, a {distance} m."
        ),
        Locale::En => format!(
            "You are not at an authorized site. Nearest site: {nearest}, {distance} m away."
        ),
    }
}
