//! Program to fetch resources from the Language Portal API.
use lang_portal_client::console::clients::portal::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
