//! # AV-02 Expiry
//!
//! Decides whether a previously issued timestamp (session token, check-in
//! code) is still inside its validity window.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `is_expired`, `ValidityWindow`
//! - **Ports Layer** (`ports/`): `ExpiryApi` (driving), `TimeSource` (driven)
//! - **Service Layer** (`service/`): `ExpiryService`
//!
//! ## Invariants
//!
//! - Expired iff `(now - issued_at) / 60000 > validity_minutes` (strict).
//! - Timestamps in the future are never expired for a non-negative window.
//! - No error conditions at decision time; only window configuration can fail.
//!
//! ## Usage Example
//!
//! ```ignore
//! use av_02_expiry::{ExpiryApi, ExpiryService, ValidityWindow};
//!
//! let service = ExpiryService::with_system_clock(ValidityWindow::from_minutes(60))?;
//! if service.is_expired(token.issued_at) {
//!     force_reauthentication();
//! }
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{elapsed_minutes, is_expired, ValidityWindow, DEFAULT_VALIDITY_MINUTES};
pub use error::ExpiryError;
pub use ports::{ExpiryApi, SystemTimeSource, TimeSource};
pub use service::ExpiryService;
