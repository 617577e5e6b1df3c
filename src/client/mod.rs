//! Language Portal API client.
//!
//! One accessor per portal resource. Each accessor sends a single `GET` to
//! `{base_url}/{resource}` and returns the JSON body when the status is in the
//! `2xx` range.
//!
//! There are two flavours of accessor:
//!
//! - `fetch_*` methods pass the body through untouched as a
//!   [`serde_json::Value`].
//! - [`Client::study_activities`], [`Client::words`], [`Client::groups`] and
//!   [`Client::study_sessions`] parse the body into the typed listings in
//!   [`responses`] and fail with [`Error::SchemaMismatch`] when the shape is
//!   not the expected one.
//!
//! URL components in this context:
//!
//! ```text
//! http://127.0.0.1:5000/api/study_sessions
//! \_______________________/\_____________/
//!            |                    |
//!         base url            resource
//! ```
//!
//! The client does not retry, cache or log. Every failure is returned to the
//! caller.
pub mod resource;
pub mod responses;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub use self::resource::Resource;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build the HTTP client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },

    /// The base URL can't have a resource path appended: it has a query or a
    /// fragment, or it is not hierarchical.
    #[error("Invalid base URL `{base_url}`: it must be a hierarchical URL without query or fragment")]
    InvalidBaseUrl { base_url: Url },

    #[error("Failed to fetch {resource}: {err}")]
    ResponseError { resource: Resource, err: Arc<reqwest::Error> },

    /// The backend answered with a status outside the `2xx` range. The
    /// message never includes the status or the body.
    #[error("Failed to fetch {resource}")]
    UnsuccessfulResponse { resource: Resource, status: StatusCode },

    #[error("Failed to parse the {resource} response as JSON: {err}")]
    InvalidJson { resource: Resource, err: Arc<serde_json::Error> },

    #[error("Unexpected shape for the {resource} response: {err}")]
    SchemaMismatch { resource: Resource, err: Arc<serde_json::Error> },
}

impl Error {
    /// The resource whose fetch failed, if the failure is tied to one.
    #[must_use]
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Error::ClientBuildingError { .. } | Error::InvalidBaseUrl { .. } => None,
            Error::ResponseError { resource, .. }
            | Error::UnsuccessfulResponse { resource, .. }
            | Error::InvalidJson { resource, .. }
            | Error::SchemaMismatch { resource, .. } => Some(*resource),
        }
    }

    /// The HTTP status, when the failure is an unsuccessful response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnsuccessfulResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Language Portal API Client
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    reqwest: ReqwestClient,
}

impl Client {
    /// Builds a client for the API mounted at `base_url`.
    ///
    /// Without a `timeout` a request waits for the backend indefinitely.
    ///
    /// # Errors
    ///
    /// Will return an error if the `base_url` has a query or a fragment, if it
    /// can't be a base, or if the underlying HTTP client can't be built.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() || base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::InvalidBaseUrl { base_url });
        }

        let builder = ReqwestClient::builder();

        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        let reqwest = builder.build().map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self { base_url, reqwest })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base_url}/study_activities`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn fetch_study_activities(&self) -> Result<Value, Error> {
        self.fetch(Resource::StudyActivities).await
    }

    /// `GET {base_url}/words`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn fetch_words(&self) -> Result<Value, Error> {
        self.fetch(Resource::Words).await
    }

    /// `GET {base_url}/groups`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn fetch_groups(&self) -> Result<Value, Error> {
        self.fetch(Resource::Groups).await
    }

    /// `GET {base_url}/study_sessions`
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn fetch_sessions(&self) -> Result<Value, Error> {
        self.fetch(Resource::StudySessions).await
    }

    /// Fetches `resource` and returns the body as untyped JSON.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - [`Error::ResponseError`] if the request can't be sent or the body
    ///   can't be read.
    /// - [`Error::UnsuccessfulResponse`] if the status is not `2xx`.
    /// - [`Error::InvalidJson`] if the body is not valid JSON.
    pub async fn fetch(&self, resource: Resource) -> Result<Value, Error> {
        let response = self.get(resource).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::ResponseError { resource, err: e.into() })?;

        serde_json::from_slice(&body).map_err(|e| Error::InvalidJson { resource, err: e.into() })
    }

    /// `GET {base_url}/study_activities` parsed into [`responses::StudyActivities`].
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`]. It also returns [`Error::SchemaMismatch`] if the
    /// JSON body does not match the expected listing.
    pub async fn study_activities(&self) -> Result<responses::StudyActivities, Error> {
        self.fetch_as(Resource::StudyActivities).await
    }

    /// `GET {base_url}/words` parsed into [`responses::Words`].
    ///
    /// # Errors
    ///
    /// See [`Client::study_activities`].
    pub async fn words(&self) -> Result<responses::Words, Error> {
        self.fetch_as(Resource::Words).await
    }

    /// `GET {base_url}/groups` parsed into [`responses::Groups`].
    ///
    /// # Errors
    ///
    /// See [`Client::study_activities`].
    pub async fn groups(&self) -> Result<responses::Groups, Error> {
        self.fetch_as(Resource::Groups).await
    }

    /// `GET {base_url}/study_sessions` parsed into [`responses::StudySessions`].
    ///
    /// # Errors
    ///
    /// See [`Client::study_activities`].
    pub async fn study_sessions(&self) -> Result<responses::StudySessions, Error> {
        self.fetch_as(Resource::StudySessions).await
    }

    async fn fetch_as<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, Error> {
        let value = self.fetch(resource).await?;

        serde_json::from_value(value).map_err(|e| Error::SchemaMismatch { resource, err: e.into() })
    }

    async fn get(&self, resource: Resource) -> Result<Response, Error> {
        let response = self
            .reqwest
            .get(self.build_url(resource))
            .send()
            .await
            .map_err(|e| Error::ResponseError { resource, err: e.into() })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::UnsuccessfulResponse {
                resource,
                status: response.status(),
            })
        }
    }

    fn build_url(&self, resource: Resource) -> String {
        let base_url = self.base_url.as_str().trim_end_matches('/');
        format!("{base_url}/{}", resource.path())
    }
}
