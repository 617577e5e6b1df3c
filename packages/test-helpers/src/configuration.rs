use lang_portal_client_configuration::{Configuration, Threshold};
use url::Url;

/// This configuration is used for testing. It points the client to the given
/// backend and disables logging so test output stays clean.
#[must_use]
pub fn ephemeral(base_url: Url) -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    config.api.base_url = base_url;

    config
}

/// Same as [`ephemeral`] but with a request timeout.
#[must_use]
pub fn ephemeral_with_timeout(base_url: Url, timeout_secs: u64) -> Configuration {
    let mut config = ephemeral(base_url);

    config.api.timeout_secs = Some(timeout_secs);

    config
}
