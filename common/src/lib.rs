//! Shared vocabulary for the uplink client.
//!
//! Contains configuration, error types and data models used by both the
//! client library and the CLI.

pub mod config;
pub mod errors;
pub mod models;
