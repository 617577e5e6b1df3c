//! Console clients.
use anyhow::Context as _;
use url::Url;

pub mod portal;

fn parse_url(addr: &str) -> anyhow::Result<Url> {
    Url::parse(addr).with_context(|| format!("failed to parse URL: `{addr}`"))
}
