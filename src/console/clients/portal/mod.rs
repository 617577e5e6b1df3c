//! Console client for the Language Portal API.
pub mod app;
pub mod console;
pub mod logger;
pub mod printer;
pub mod service;
