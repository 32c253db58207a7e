//! Shared data models for the uplink client.

pub mod database;

// Re-export commonly used types
pub use database::DatabaseDescriptor;
