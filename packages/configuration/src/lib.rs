//! Configuration data structures for the Language Portal API client.
//!
//! The configuration is loaded with [Figment](https://docs.rs/figment) from
//! three layered sources, lowest priority first:
//!
//! 1. The built-in defaults.
//! 2. A TOML document, either the whole content of the
//!    `LANG_PORTAL_CONFIG_TOML` env var or the file at
//!    `LANG_PORTAL_CONFIG_TOML_PATH` (the env var content wins).
//! 3. Single-value overrides from env vars prefixed with
//!    `LANG_PORTAL_CONFIG_OVERRIDE_`, using `__` to separate sections. For
//!    example `LANG_PORTAL_CONFIG_OVERRIDE_API__BASE_URL`.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::sync::Arc;

use thiserror::Error;

// Environment variables

/// The whole `lang_portal_client.toml` file content. It has priority over the
/// config file, even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "LANG_PORTAL_CONFIG_TOML";

/// The `lang_portal_client.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "LANG_PORTAL_CONFIG_TOML_PATH";

/// Prefix for the env vars that override single configuration values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "LANG_PORTAL_CONFIG_OVERRIDE_";

/// Path separator in env var names for nested values in configuration.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Api = v1::api::Api;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info from the environment.
    ///
    /// `default_config_toml_path` is used when the
    /// `LANG_PORTAL_CONFIG_TOML_PATH` env var is not set.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = env::var(ENV_VAR_CONFIG_TOML).ok();

        let config_toml_path = env::var(ENV_VAR_CONFIG_TOML_PATH).unwrap_or(default_config_toml_path);

        Self {
            config_toml,
            config_toml_path,
        }
    }

    /// Build Configuration Info for an explicit config file, ignoring the
    /// config env vars.
    #[must_use]
    pub fn from_path(config_toml_path: &str) -> Self {
        Self {
            config_toml: None,
            config_toml_path: config_toml_path.to_owned(),
        }
    }

    /// Build Configuration Info from inline TOML content.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The merged configuration sources could not be extracted into a
    /// [`Configuration`].
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Arc<figment::Error> },

    /// The configuration could not be encoded into TOML.
    #[error("Failed to encode the configuration into TOML: {source}")]
    TomlEncodeError { source: Arc<toml::ser::Error> },

    /// The configuration file could not be written.
    #[error("Failed to write the configuration file `{path}`: {source}")]
    UnableToWriteConfigFile { path: String, source: Arc<std::io::Error> },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Arc::new(err) }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::TomlEncodeError { source: Arc::new(err) }
    }
}
