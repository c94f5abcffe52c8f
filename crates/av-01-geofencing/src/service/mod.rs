//! Service Layer
//!
//! Wires the driven ports to the domain and records logs and metrics.

pub mod check_in_service;

pub use check_in_service::CheckInService;
