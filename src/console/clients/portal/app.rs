//! Language Portal API client:
//!
//! Examples:
//!
//! Fetch the words listing:
//!
//! ```text
//! cargo run --bin portal_client -- --base-url http://127.0.0.1:5000/api words | jq
//! ```
//!
//! Fetch the study sessions parsed into the typed listing:
//!
//! ```text
//! cargo run --bin portal_client -- --typed sessions | jq
//! ```
//!
//! Fetch every resource concurrently:
//!
//! ```text
//! cargo run --bin portal_client -- all | jq
//! ```
//!
//! Logs go to standard error. Their style can be chosen with `--log-style`
//! (`default`, `pretty`, `compact` or `json`):
//!
//! ```text
//! cargo run --bin portal_client -- --log-style json all 2> portal_client.log
//! ```
//!
//! The configuration is loaded like this:
//!
//! ```text
//! cargo run --bin portal_client -- --config-path "./share/default/config/lang_portal_client.toml" groups
//! LANG_PORTAL_CONFIG_TOML=$(cat "./share/default/config/lang_portal_client.toml") cargo run --bin portal_client -- groups
//! LANG_PORTAL_CONFIG_OVERRIDE_API__BASE_URL="http://10.0.0.2:5000/api" cargo run --bin portal_client -- groups
//! ```
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use lang_portal_client_configuration::Configuration;

use super::console::Console;
use super::service::{Format, Service};
use crate::bootstrap::config::initialize_configuration;
use crate::bootstrap::logging::{self, TraceStyle};
use crate::client::{Client, Resource};
use crate::console::clients::parse_url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the portal API, including the `/api` prefix. Overrides the
    /// configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds. Overrides the configuration. Requests wait
    /// indefinitely when no timeout is set.
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config_path: Option<String>,

    /// Parse each listing into its typed form before printing it.
    #[arg(long)]
    typed: bool,

    /// Output style for the logs written to standard error.
    #[arg(long, value_enum, default_value_t = LogStyle::Default)]
    log_style: LogStyle,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// `GET /api/study_activities`
    StudyActivities,
    /// `GET /api/words`
    Words,
    /// `GET /api/groups`
    Groups,
    /// `GET /api/study_sessions`
    Sessions,
    /// Fetch every resource concurrently.
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LogStyle {
    Default,
    /// Multi-line output with source file paths.
    Pretty,
    Compact,
    /// One JSON object per line.
    Json,
}

impl From<LogStyle> for TraceStyle {
    fn from(log_style: LogStyle) -> Self {
        match log_style {
            LogStyle::Default => TraceStyle::Default,
            LogStyle::Pretty => TraceStyle::Pretty(true),
            LogStyle::Compact => TraceStyle::Compact,
            LogStyle::Json => TraceStyle::Json,
        }
    }
}

impl Command {
    fn resource(self) -> Option<Resource> {
        match self {
            Command::StudyActivities => Some(Resource::StudyActivities),
            Command::Words => Some(Resource::Words),
            Command::Groups => Some(Resource::Groups),
            Command::Sessions => Some(Resource::StudySessions),
            Command::All => None,
        }
    }
}

/// # Errors
///
/// Will return an error if the configuration is not valid or any fetch
/// fails.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = setup_config(&args)?;

    logging::setup(&config, &args.log_style.into());

    let client = Client::new(config.api.base_url.clone(), config.api.timeout()).context("failed to build the portal API client")?;

    let service = Service::new(client, Console::new());

    let format = if args.typed { Format::Typed } else { Format::Raw };

    match args.command.resource() {
        Some(resource) => {
            service.fetch_one(resource, format).await?;
        }
        None => {
            let fetch_results = service.fetch_all().await.context("a fetch task failed to run")?;

            let failures = fetch_results.iter().filter(|fetch_result| fetch_result.result.is_err()).count();

            if failures > 0 {
                tracing::error!("{failures} of {} resources could not be fetched", fetch_results.len());
                bail!("{failures} of {} resources could not be fetched", fetch_results.len());
            }
        }
    }

    Ok(())
}

fn setup_config(args: &Args) -> anyhow::Result<Configuration> {
    let mut config = initialize_configuration(args.config_path.as_deref()).context("invalid config format")?;

    if let Some(base_url) = &args.base_url {
        config.api.base_url = parse_url(base_url)?;
    }

    if let Some(timeout) = args.timeout {
        config.api.timeout_secs = Some(timeout);
    }

    Ok(config)
}
