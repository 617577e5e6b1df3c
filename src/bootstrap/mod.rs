//! Client application bootstrapping.
//!
//! It loads the configuration and sets up logging before any request is made.
pub mod config;
pub mod logging;
