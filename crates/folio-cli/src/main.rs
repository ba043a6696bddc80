//! Folio CLI
//!
//! Renders the portfolio page in the terminal and exposes every content
//! API operation for maintenance.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_core::Config;
use folio_core::config::{BACKEND_URL_ENV, DATA_SOURCE_ENV, LOG_FILTER_ENV};

mod cli;
mod commands;

use cli::{Args, Command};

const DEFAULT_LOG_FILTER: &str = "warn,folio=info";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_with(args.config.as_deref(), |key| match key {
        BACKEND_URL_ENV if args.backend_url.is_some() => args.backend_url.clone(),
        DATA_SOURCE_ENV if args.use_static => Some("static".to_string()),
        _ => std::env::var(key).ok(),
    })?;

    init_tracing(&config);
    tracing::debug!(?config, "Configuration loaded");

    match args.command {
        Command::Show(show) => commands::show::run(&config, show).await,
        Command::Health => commands::admin::health(&config).await,
        Command::Profile(cmd) => commands::admin::profile(&config, cmd).await,
        Command::Projects(cmd) => commands::admin::projects(&config, cmd).await,
        Command::Contacts(cmd) => commands::admin::contacts(&config, cmd).await,
        Command::Testimonials(cmd) => commands::admin::testimonials(&config, cmd).await,
    }
}

/// `RUST_LOG` wins, then `FOLIO_LOG` / the config file, then the default.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
        tracing_subscriber::EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!("Invalid {LOG_FILTER_ENV} directive '{directive}': {err}");
            DEFAULT_LOG_FILTER.into()
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
