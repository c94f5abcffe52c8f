//! Service Layer

pub mod expiry_service;

pub use expiry_service::ExpiryService;
