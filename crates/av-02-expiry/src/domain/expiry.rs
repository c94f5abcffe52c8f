//! Expiry decision
//!
//! `elapsed = (now - issued_at) / 60000` minutes, expired iff
//! `elapsed > validity_minutes`. The comparison is strict: a token checked at
//! exactly the end of its window is still valid.

use shared_types::{Timestamp, MILLIS_PER_MINUTE};

/// Minutes elapsed from `issued_at` to `now`.
///
/// Negative when `issued_at` is in the future. Computed in `i128` so that no
/// pair of `u64` timestamps can overflow.
pub fn elapsed_minutes(issued_at: Timestamp, now: Timestamp) -> f64 {
    let elapsed_ms = i128::from(now) - i128::from(issued_at);
    elapsed_ms as f64 / MILLIS_PER_MINUTE
}

/// Whether a timestamp issued at `issued_at` has outlived `validity_minutes`
/// at instant `now`.
///
/// Total over its inputs:
/// - future `issued_at` gives a negative elapsed time and `false` for any
///   non-negative window
/// - `issued_at == 0` is expired for any realistic `now`
/// - a NaN window is never exceeded
pub fn is_expired(issued_at: Timestamp, validity_minutes: f64, now: Timestamp) -> bool {
    elapsed_minutes(issued_at, now) > validity_minutes
}
