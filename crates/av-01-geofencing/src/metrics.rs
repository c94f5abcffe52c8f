//! Metrics hooks for check-in operations
//!
//! Counts geofence outcomes and acquisition failures so the host application
//! can report how often users are turned away and why.
//!
//! ## Usage
//!
//! ```ignore
//! use av_01_geofencing::metrics::{GeofenceMetrics, MetricsRecorder};
//!
//! let metrics = GeofenceMetrics::new();
//! metrics.record_check(true, 420);
//! assert_eq!(metrics.snapshot().admitted, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for geofence checks.
#[derive(Default)]
pub struct GeofenceMetrics {
    /// Total geofence checks performed
    pub checks: AtomicU64,
    /// Checks admitted by some site
    pub admitted: AtomicU64,
    /// Checks outside every site
    pub rejected: AtomicU64,
    /// Check-ins aborted because no coordinate could be obtained
    pub acquisition_failures: AtomicU64,
    /// Sum of reported distances on rejection, in meters
    pub rejected_distance_m: AtomicU64,
}

impl GeofenceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed geofence check.
    ///
    /// # Arguments
    /// * `admitted` - Whether some site admitted the coordinate
    /// * `distance_meters` - Rounded distance reported in the result
    pub fn record_check(&self, admitted: bool, distance_meters: u64) {
        self.checks.fetch_add(1, Ordering::Relaxed);
        if admitted {
            self.admitted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            self.rejected_distance_m
                .fetch_add(distance_meters, Ordering::Relaxed);
        }
    }

    /// Record a check-in that stopped before validation.
    pub fn record_acquisition_failure(&self) {
        self.acquisition_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            checks: self.checks.load(Ordering::Relaxed),
            admitted: self.admitted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            acquisition_failures: self.acquisition_failures.load(Ordering::Relaxed),
            avg_rejected_distance_m: self.avg_rejected_distance_m(),
        }
    }

    /// Mean distance to the nearest site over rejected checks
    pub fn avg_rejected_distance_m(&self) -> u64 {
        let total = self.rejected_distance_m.load(Ordering::Relaxed);
        let count = self.rejected.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Fraction of checks that were admitted
    pub fn admission_rate(&self) -> f64 {
        let total = self.checks.load(Ordering::Relaxed);
        let admitted = self.admitted.load(Ordering::Relaxed);
        if total > 0 {
            admitted as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.checks.store(0, Ordering::Relaxed);
        self.admitted.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.acquisition_failures.store(0, Ordering::Relaxed);
        self.rejected_distance_m.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub checks: u64,
    pub admitted: u64,
    pub rejected: u64,
    pub acquisition_failures: u64,
    pub avg_rejected_distance_m: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward counts to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    /// Record a completed geofence check
    fn record_check(&self, admitted: bool, distance_meters: u64);

    /// Record an acquisition failure
    fn record_acquisition_failure(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_check(&self, _: bool, _: u64) {}
    fn record_acquisition_failure(&self) {}
}

impl MetricsRecorder for GeofenceMetrics {
    fn record_check(&self, admitted: bool, distance_meters: u64) {
        GeofenceMetrics::record_check(self, admitted, distance_meters);
    }

    fn record_acquisition_failure(&self) {
        GeofenceMetrics::record_acquisition_failure(self);
    }
}
