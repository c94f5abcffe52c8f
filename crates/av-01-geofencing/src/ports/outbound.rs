//! Outbound Ports (Driven Ports)
//!
//! Dependencies the Geofencing subsystem needs from the host application.
//! Permission prompts, sensor access and retries all live behind this port.

use async_trait::async_trait;
use shared_types::{AcquisitionError, Coordinate};

/// Device location source (Driven Port)
///
/// Implementations request permission and read the sensor. They must report
/// a distinguishable `AcquisitionError` instead of inventing a coordinate.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Current position of the device.
    async fn current_location(&self) -> Result<Coordinate, AcquisitionError>;
}

/// Fixed-answer location provider for testing.
#[cfg(test)]
pub struct MockLocationProvider {
    response: std::sync::Mutex<Result<Coordinate, AcquisitionError>>,
    calls: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockLocationProvider {
    pub fn at(coordinate: Coordinate) -> Self {
        Self::with_response(Ok(coordinate))
    }

    pub fn failing(error: AcquisitionError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Coordinate, AcquisitionError>) -> Self {
        Self {
            response: std::sync::Mutex::new(response),
            calls: std::sync::atomic::AtomicU64::new(0),
        }
    }

    pub fn set(&self, response: Result<Coordinate, AcquisitionError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_location(&self) -> Result<Coordinate, AcquisitionError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}
