//! Sales Dashboard Server
//!
//! Run with: cargo run -- [--config PATH] [serve|config]
//!
//! # Configuration
//!
//! Settings come from `--config`, else `~/.config/sales-dashboard/config.toml`
//! or `./config.toml`, else defaults. Environment variables override files:
//! - `SALES_DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SALES_DASHBOARD_PORT`: Port to listen on (default: 8050)
//! - `SALES_DASHBOARD_DEFAULT_REGION`: Region selected on page load
//! - `SALES_DASHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `SALES_DASHBOARD_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Takes precedence over the configured log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use sales_dashboard::api::{serve, ApiConfig, AppState};
use sales_dashboard::config::{generate_default_config, Config, LoggingConfig};
use sales_dashboard::dashboard::{Dashboard, DashboardSettings};
use sales_dashboard::data::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sales-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive sales & profit dashboard filtered by region")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard server (default)
    Serve,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(cli.config).await,
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

async fn run_server(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let loaded = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&loaded.config.logging);

    tracing::info!("Starting sales dashboard v{}", env!("CARGO_PKG_VERSION"));
    loaded.log();
    let config = loaded.config;

    let dataset = Arc::new(Dataset::sample());
    tracing::info!(
        records = dataset.len(),
        regions = ?dataset.regions(),
        "Dataset loaded"
    );

    let dashboard = Dashboard::new(dataset, DashboardSettings::from(&config.dashboard));
    let api_config = ApiConfig::from(&config.server);
    let state = AppState::new(dashboard, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Sales dashboard stopped");
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("sales_dashboard={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
