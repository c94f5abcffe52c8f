//! Outbound (Driven) ports for the Expiry subsystem.

use shared_types::Timestamp;

/// Clock consulted when the caller does not pass `now` explicitly.
///
/// Expiry decisions are pure; this port is the only place the wall clock
/// enters the subsystem.
pub trait TimeSource: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source.
///
/// A clock set before 1970 reads as epoch zero, which makes every issued
/// timestamp look like it lies in the future (not expired).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

#[cfg(test)]
const MINUTE_MS: u64 = 60_000;

/// Session clock for tests, moved in whole minutes like a validity window.
#[cfg(test)]
pub struct MockTimeSource {
    now: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockTimeSource {
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: std::sync::atomic::AtomicU64::new(now),
        }
    }

    pub fn advance_minutes(&self, minutes: u64) {
        self.advance_ms(minutes * MINUTE_MS);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.fetch_add(ms, std::sync::atomic::Ordering::SeqCst);
    }

    /// Move the clock backwards, as a device clock correction would.
    pub fn rewind_minutes(&self, minutes: u64) {
        self.now
            .fetch_sub(minutes * MINUTE_MS, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(std::sync::atomic::Ordering::SeqCst)
    }
}
