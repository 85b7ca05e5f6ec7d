//! DevOps sample application entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devops_sample_app::api::handlers::{APP_MESSAGE, APP_VERSION};
use devops_sample_app::api::{create_router, serve, AppState};
use devops_sample_app::config::{Config, LogFormat};
use devops_sample_app::metrics;
use devops_sample_app::utils::shutdown_signal;

/// DevOps sample application.
#[derive(Parser, Debug)]
#[command(name = "devops-sample-app")]
#[command(about = "Info and health-check HTTP service")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bind address (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config.with_overrides(args.host, args.port),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_logging(&config, args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Install the global tracing subscriber.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("devops_sample_app=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("{} - CONFIGURATION CHECK", APP_MESSAGE.to_uppercase());
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");
    let addr = config.socket_addr()?;

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Version: {}", APP_VERSION);
    println!("  Listen Address: {}", addr);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled { "Enabled" } else { "Disabled" }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    let mut app_state = AppState::new();
    if config.metrics_enabled {
        app_state = app_state.with_metrics(metrics::install_recorder()?);
    }

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return Err(e.into());
        }
    };
    info!("{} v{} listening on {}", APP_MESSAGE, APP_VERSION, addr);

    serve(listener, create_router(app_state), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
