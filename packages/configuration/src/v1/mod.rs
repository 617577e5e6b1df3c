//! Version `1` for the Language Portal API client configuration.
//!
//! Default configuration:
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api"
//!
//! [logging]
//! threshold = "info"
//! ```
//!
//! The request timeout is optional and disabled by default:
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api"
//! timeout_secs = 5
//! ```
pub mod api;
pub mod logging;

use std::fs;
use std::sync::Arc;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::api::Api;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Configuration for the Language Portal API client.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Remote portal API settings.
    #[serde(default = "Api::default")]
    pub api: Api,

    /// Logging configuration.
    #[serde(default = "Logging::default")]
    pub logging: Logging,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// The inline TOML content has priority over the config file. Env var
    /// overrides are applied last. A missing config file is not an error:
    /// the defaults are used instead.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the merged sources are not a valid configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match &info.config_toml {
            Some(config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file content is not a valid configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        Self::load(&Info::from_path(path))
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be encoded into TOML or
    /// the file can't be written.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        fs::write(path, self.to_toml()?).map_err(|err| Error::UnableToWriteConfigFile {
            path: path.to_owned(),
            source: Arc::new(err),
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
