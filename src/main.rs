//! portal-state command-line front end.
//!
//! Reads a site document (plus optional member and offer documents), resolves
//! the portal state and prints it as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_state::adapters::{read_document, InputError};
use portal_state::application::{ResolvePortalStateHandler, ResolvePortalStateQuery};
use portal_state::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};

/// Resolve membership and pricing state for a site visitor.
#[derive(Debug, Parser)]
#[command(name = "portal-state", version, about)]
struct Cli {
    /// Site configuration document (JSON or YAML)
    #[arg(long)]
    site: PathBuf,

    /// Member document; omit for a logged-out visitor
    #[arg(long)]
    member: Option<PathBuf>,

    /// Offer document
    #[arg(long)]
    offer: Option<PathBuf>,

    /// Page query in the form <productId>/<monthly|yearly>
    #[arg(long)]
    page_query: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
    Ok(())
}

fn run(cli: Cli, config: &AppConfig) -> Result<(), CliError> {
    let query = ResolvePortalStateQuery {
        site: read_document(&cli.site)?,
        member: cli.member.as_ref().map(read_document).transpose()?,
        offer: cli.offer.as_ref().map(read_document).transpose()?,
        page_query: cli.page_query,
    };

    let state = ResolvePortalStateHandler::new().handle(&query);

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{}", output);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(site = %cli.site.display(), "Resolving portal state");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
