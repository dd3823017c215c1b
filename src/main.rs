use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use company_hub::config::Config;
use company_hub::feeds::{create_feeds, demo_feeds};
use company_hub::observability::logging::init_logging;
use company_hub::pipeline::normalize::NormalizationRegistry;
use company_hub::repository::CompanyRepository;
use company_hub::server::{run_server, AppState};

#[derive(Parser)]
#[command(name = "company-hub")]
#[command(about = "Unified read API over heterogeneous company feeds")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Path to the TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: String,
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Serve the built-in sample feeds instead of live upstreams
        #[arg(long)]
        demo: bool,
    },
    /// Fetch and normalize once, printing the snapshot as JSON
    Snapshot {
        /// Path to the TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: String,
        /// Use the built-in sample feeds instead of live upstreams
        #[arg(long)]
        demo: bool,
    },
}

/// Wire feeds and mappers together, either from configuration or from the
/// built-in demo data. Returns the configured port when one was loaded.
fn build_repository(config_path: &str, demo: bool) -> anyhow::Result<(CompanyRepository, Option<u16>)> {
    if demo {
        info!("Using built-in demo feeds");
        let repository = CompanyRepository::new(demo_feeds(), NormalizationRegistry::default());
        return Ok((repository, None));
    }

    let config = Config::load(config_path)?;
    let registry = NormalizationRegistry::new(config.feeds.bravo_country.clone());
    let feeds = create_feeds(&config.feeds);
    Ok((CompanyRepository::new(feeds, registry), Some(config.server.port)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port, demo } => {
            let (repository, config_port) = build_repository(&config, demo)?;
            let port = port.or(config_port).unwrap_or(8080);
            let state = AppState {
                repository: Arc::new(repository),
            };
            run_server(state, port).await?;
        }
        Commands::Snapshot { config, demo } => {
            let (repository, _) = build_repository(&config, demo)?;
            let companies = repository.get_all().await?;
            info!("Snapshot contains {} companies", companies.len());
            println!("{}", serde_json::to_string_pretty(&companies)?);
        }
    }

    Ok(())
}
