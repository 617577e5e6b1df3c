//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `LANG_PORTAL_`.
use lang_portal_client_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/lang_portal_client.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `lang_portal_client.toml`. Either the one given
///    in `config_path`, the one in `LANG_PORTAL_CONFIG_TOML_PATH` or the
///    default one.
/// 2. Environment variable: `LANG_PORTAL_CONFIG_TOML`. The variable contains
///    the same contents as the `lang_portal_client.toml` file.
///
/// Environment variable has priority over the config file, unless an explicit
/// `config_path` is given.
///
/// # Errors
///
/// Will return an error if the loaded configuration is not valid.
pub fn initialize_configuration(config_path: Option<&str>) -> Result<Configuration, Error> {
    let info = match config_path {
        Some(path) => Info::from_path(path),
        None => Info::new(DEFAULT_PATH_CONFIG.to_string()),
    };

    Configuration::load(&info)
}
