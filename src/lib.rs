//! **Language Portal API client** is a small async client for the Quebec French
//! language portal backend.
//!
//! The backend exposes four read-only listings under its `/api` prefix:
//!
//! Resource         | Endpoint
//! -----------------|----------------------------
//! Study activities | `GET /api/study_activities`
//! Words            | `GET /api/words`
//! Groups           | `GET /api/groups`
//! Study sessions   | `GET /api/study_sessions`
//!
//! Each one has an accessor on [`Client`](crate::client::Client):
//!
//! ```rust,no_run
//! use lang_portal_client::client::Client;
//! use url::Url;
//!
//! # async fn example() -> Result<(), lang_portal_client::client::Error> {
//! let client = Client::new(Url::parse("http://127.0.0.1:5000/api").unwrap(), None)?;
//!
//! let words = client.fetch_words().await?;
//!
//! println!("{words}");
//! # Ok(())
//! # }
//! ```
//!
//! A failed fetch never panics. It returns a [`client::Error`] naming the
//! resource. For an unsuccessful HTTP status the message is
//! `Failed to fetch <resource>` and the status is available through
//! [`client::Error::status`].
//!
//! # Configuration
//!
//! The base URL, an optional request timeout and the logging threshold come
//! from the `lang-portal-client-configuration` package. The default
//! configuration is:
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api"
//!
//! [logging]
//! threshold = "info"
//! ```
//!
//! # Console client
//!
//! The `portal_client` binary prints any of the listings as JSON. Refer to
//! [`console::clients::portal::app`] for the usage.
pub mod bootstrap;
pub mod client;
pub mod console;
