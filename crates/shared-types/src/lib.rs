//! # Shared Types Crate
//!
//! Value types used across the validation subsystems.
//!
//! ## Design Principles
//!
//! - **Values, not identities**: a `Coordinate` is built fresh for every
//!   validation call and never mutated.
//! - **Explicit time**: timestamps are plain epoch milliseconds; nothing in
//!   this crate reads the wall clock.
//! - **Distinct failures**: failing to *obtain* a coordinate
//!   (`AcquisitionError`) is a different outcome from a coordinate that lies
//!   outside every site.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
