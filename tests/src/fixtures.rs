//! Shared test fixtures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use av_01_geofencing::{LocationProvider, EARTH_RADIUS_METERS};
use av_02_expiry::TimeSource;
use av_telemetry::{init_tracing, TelemetryConfig};
use shared_types::{AcquisitionError, Coordinate, Timestamp};

/// 2026-01-01T00:00:00Z in epoch milliseconds.
pub const JAN_1_2026: Timestamp = 1_767_225_600_000;

pub const MINUTE_MS: u64 = 60_000;

static LOGGING: Once = Once::new();

/// Install a quiet subscriber once per test process.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = TelemetryConfig::default().with_log_level("warn");
        // A subscriber installed by another harness is fine.
        let _ = init_tracing(&config);
    });
}

/// Point `meters` due north of `origin` along its meridian.
pub fn north_of(origin: Coordinate, meters: f64) -> Coordinate {
    let delta_deg = meters / EARTH_RADIUS_METERS * 180.0 / std::f64::consts::PI;
    Coordinate::new_unchecked(origin.latitude + delta_deg, origin.longitude)
}

/// Point `meters` due east of `origin` along its parallel, measured on the
/// great circle tangent at `origin` (exact only for small distances).
pub fn east_of(origin: Coordinate, meters: f64) -> Coordinate {
    let lat_rad = origin.latitude * std::f64::consts::PI / 180.0;
    let delta_deg = meters / (EARTH_RADIUS_METERS * lat_rad.cos()) * 180.0 / std::f64::consts::PI;
    Coordinate::new_unchecked(origin.latitude, origin.longitude + delta_deg)
}

/// Location provider returning a scripted answer.
pub struct ScriptedLocation {
    response: Mutex<Result<Coordinate, AcquisitionError>>,
    calls: AtomicU64,
}

impl ScriptedLocation {
    pub fn at(coordinate: Coordinate) -> Self {
        Self::new(Ok(coordinate))
    }

    pub fn failing(error: AcquisitionError) -> Self {
        Self::new(Err(error))
    }

    fn new(response: Result<Coordinate, AcquisitionError>) -> Self {
        Self {
            response: Mutex::new(response),
            calls: AtomicU64::new(0),
        }
    }

    pub fn move_to(&self, coordinate: Coordinate) {
        *self.response.lock().unwrap() = Ok(coordinate);
    }

    pub fn fail_with(&self, error: AcquisitionError) {
        *self.response.lock().unwrap() = Err(error);
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocation {
    async fn current_location(&self) -> Result<Coordinate, AcquisitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

/// Manually driven clock.
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn advance_minutes(&self, minutes: u64) {
        self.now.fetch_add(minutes * MINUTE_MS, Ordering::SeqCst);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Helper used by flows that need a fully configured registry from JSON.
pub fn campus_config_json() -> &'static str {
    r#"{
        "locale": "en",
        "sites": [
            { "name": "Fatec Votorantim", "center": { "latitude": -23.439583, "longitude": -47.368 }, "radius_meters": 1000.0 },
            { "name": "Annex", "center": { "latitude": -23.4305, "longitude": -47.368 }, "radius_meters": 300.0 }
        ]
    }"#
}

pub fn load_campus() -> anyhow::Result<av_01_geofencing::GeofenceValidator> {
    let config = av_01_geofencing::GeofenceConfig::from_json_str(campus_config_json())?;
    Ok(config.into_validator()?)
}
