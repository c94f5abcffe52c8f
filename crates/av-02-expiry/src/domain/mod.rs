//! Domain Layer - Pure business logic
//!
//! RULES:
//! - No I/O operations
//! - No clock reads: "now" is always a parameter

pub mod expiry;
pub mod window;

pub use expiry::{elapsed_minutes, is_expired};
pub use window::{ValidityWindow, DEFAULT_VALIDITY_MINUTES};
