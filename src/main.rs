//! i🩷Worksheets site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ limits ─▶ security headers
//!                                                          │
//!                                                          ▼
//!                                               ┌────────────────────┐
//!                                               │  path normalizer   │──▶ 308 Location
//!                                               └─────────┬──────────┘
//!                                                         ▼
//!                                    "/" landing page │ "/health" │ 404 page
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use worksheets_site::config::{load_config, validate_config, ConfigError, SiteConfig};
use worksheets_site::http::HttpServer;
use worksheets_site::lifecycle::{wait_for_signal, Shutdown};
use worksheets_site::observability::{logging, metrics};
use worksheets_site::site::{render_home, SiteMeta};

#[derive(Parser)]
#[command(name = "worksheets-site")]
#[command(about = "Landing page server with canonical path redirects", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long, global = true)]
    bind: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site (default)
    Serve,
    /// Render the landing page without starting a server
    Render {
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Load and validate the configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Render { out } => {
            let html = render_home(&SiteMeta::from(&config.site), Utc::now())?;
            match out {
                Some(path) => fs::write(path, html)?,
                None => println!("{html}"),
            }
            Ok(())
        }
        Commands::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
            eprintln!("Configuration OK");
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<SiteConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

async fn serve(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability)?;

    tracing::info!("worksheets-site v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        canonical_url = %config.site.canonical_url,
        normalize = config.normalize.enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
