//! Ports Layer
//!
//! - Driving Ports (inbound) - API for the session flow
//! - Driven Ports (outbound) - Clock

pub mod inbound;
pub mod outbound;

pub use inbound::ExpiryApi;
pub use outbound::{SystemTimeSource, TimeSource};
