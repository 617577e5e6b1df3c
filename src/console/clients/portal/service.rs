use std::sync::Arc;

use anyhow::Context as _;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::task::{JoinError, JoinSet};

use super::printer::Printer;
use crate::client::{Client, Error, Resource};

/// How a fetched body is turned into the printed JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// The body as the backend sent it.
    #[default]
    Raw,
    /// The body parsed into its typed listing and encoded again. Unknown
    /// fields are dropped and a wrong shape is an error.
    Typed,
}

/// The outcome of fetching one resource.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub resource: Resource,
    pub result: Result<Value, Error>,
}

pub struct Service<P: Printer> {
    pub(crate) client: Arc<Client>,
    pub(crate) printer: P,
}

impl<P: Printer> Service<P> {
    #[must_use]
    pub fn new(client: Client, printer: P) -> Self {
        Self {
            client: Arc::new(client),
            printer,
        }
    }

    #[must_use]
    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Fetches one resource and prints its JSON body.
    ///
    /// # Errors
    ///
    /// Will return an error if the fetch fails or the body can't be encoded
    /// back into JSON.
    pub async fn fetch_one(&self, resource: Resource, format: Format) -> anyhow::Result<Value> {
        tracing::debug!("Fetching {resource} from {} ...", self.client.base_url());

        let value = match format {
            Format::Raw => self.client.fetch(resource).await?,
            Format::Typed => fetch_typed(&self.client, resource).await?,
        };

        let json = serde_json::to_string_pretty(&value).context("failed to serialize the response into JSON")?;

        self.printer.println(&json);

        Ok(value)
    }

    /// Fetches all the resources concurrently and prints a JSON object keyed
    /// by resource path. A failed resource is reported as
    /// `{ "error": "<message>" }` instead of its body.
    ///
    /// # Errors
    ///
    /// It will return an error if some of the fetch tasks panic or otherwise
    /// fail to run. Fetch failures are part of the returned results.
    ///
    /// # Panics
    ///
    /// It would panic if `serde_json` produces invalid json for the
    /// `to_string_pretty` function.
    pub async fn fetch_all(&self) -> Result<Vec<FetchResult>, JoinError> {
        tracing::info!("Fetching all resources from {} ...", self.client.base_url());

        let mut fetches = JoinSet::new();

        for resource in Resource::ALL {
            let client = self.client.clone();

            fetches.spawn(async move {
                FetchResult {
                    resource,
                    result: client.fetch(resource).await,
                }
            });
        }

        let mut fetch_results = Vec::with_capacity(Resource::ALL.len());

        while let Some(fetch_result) = fetches.join_next().await {
            fetch_results.push(fetch_result?);
        }

        fetch_results.sort_by_key(|fetch_result| fetch_result.resource);

        for fetch_result in &fetch_results {
            match &fetch_result.result {
                Ok(_) => tracing::debug!("{} fetched", fetch_result.resource),
                Err(err) => self.printer.eprintln(&format!("✗ - {err}")),
            }
        }

        self.printer.println(
            &serde_json::to_string_pretty(&report(&fetch_results)).expect("it should consume valid json"),
        );

        Ok(fetch_results)
    }
}

async fn fetch_typed(client: &Client, resource: Resource) -> anyhow::Result<Value> {
    match resource {
        Resource::StudyActivities => to_value(&client.study_activities().await?),
        Resource::Words => to_value(&client.words().await?),
        Resource::Groups => to_value(&client.groups().await?),
        Resource::StudySessions => to_value(&client.study_sessions().await?),
    }
}

fn to_value<T: Serialize>(listing: &T) -> anyhow::Result<Value> {
    serde_json::to_value(listing).context("failed to encode the typed listing")
}

fn report(fetch_results: &[FetchResult]) -> Value {
    let mut report = Map::new();

    for fetch_result in fetch_results {
        let entry = match &fetch_result.result {
            Ok(body) => body.clone(),
            Err(err) => json!({ "error": err.to_string() }),
        };

        report.insert(fetch_result.resource.path().to_owned(), entry);
    }

    Value::Object(report)
}
