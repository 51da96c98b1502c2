//! Car marketplace HTTP gateway (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                   GATEWAY                    │
//!   Client Request    │  ┌────────┐   ┌──────────┐   ┌───────────┐   │
//!   ──────────────────┼─▶│  http  │──▶│ handlers │──▶│  mapping  │   │
//!                     │  │ server │   │ profile  │   │ wire→rpc  │   │
//!                     │  └────────┘   │ feed     │   └─────┬─────┘   │
//!                     │               │ predict  │         ▼         │
//!   Client Response   │  ┌────────┐   └──────────┘   ┌───────────┐   │     gRPC
//!   ◀─────────────────┼──│ error  │◀─────────────────│  backend  │◀──┼──── Services
//!                     │  │ mapper │                  │  clients  │   │
//!                     │  └────────┘                  └───────────┘   │
//!                     │                                              │
//!                     │  config · observability · lifecycle          │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use car_gateway::config::{load_config, load_env_file, load_from_env};
use car_gateway::lifecycle::{bootstrap_registry, shutdown_signal};
use car_gateway::observability::{init_logging, init_metrics};
use car_gateway::{GatewayServer, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "car-gateway", version, about = "HTTP gateway for the car marketplace services")]
struct Cli {
    /// TOML config file. Without it, defaults plus the environment are used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dotenv file loaded before the environment is read. A missing file is skipped.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_loaded = load_env_file(&cli.env_file)?;
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };

    init_logging(config.mode, config.log_level());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = %config.mode,
        env_file = %cli.env_file.display(),
        env_loaded,
        "car-gateway starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        profile = %config.backends.profile,
        feed = %config.backends.feed,
        prediction = %config.backends.prediction,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let registry = match bootstrap_registry(&config).await {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            std::process::exit(1);
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    GatewayServer::new(config, &registry)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
