//! Testing helpers for the Language Portal API client.
pub mod backend;
pub mod configuration;
