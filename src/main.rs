//! Emergency note service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser            ┌──────────────────────────────────────────────────┐
//!     ───────────────────┼─▶ http (axum router + middleware)                 │
//!                        │      │                                           │
//!                        │      ▼                                           │
//!                        │   workflow ── gate ─ normalize ─ rules ─ draft   │
//!                        │      │                │                          │
//!                        │      ▼                ▼                          │
//!     ◀──────────────────┼── render          session store ◀── sweeper     │
//!       page / redirect  │                                                  │
//!                        │   config · observability · security · lifecycle │
//!                        └──────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use emergency_note::config::{load_config, AppConfig};
use emergency_note::lifecycle::{shutdown_signal, Shutdown};
use emergency_note::net::load_tls_config;
use emergency_note::observability::{logging, metrics};
use emergency_note::{AppError, HttpServer};

#[derive(Parser)]
#[command(name = "emergency-note")]
#[command(about = "Session-backed emergency note workflow server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability);
    tracing::info!("emergency-note v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        session_idle_secs = config.session.idle_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config)?;
    let tls = server.config().listener.tls.clone();
    let bind_address = server.config().listener.bind_address.clone();

    match tls {
        Some(tls) => {
            let addr: SocketAddr = bind_address
                .parse()
                .map_err(|_| AppError::Address(bind_address.clone()))?;
            let rustls = load_tls_config(&tls).await?;
            server.run_tls(addr, rustls, shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(&bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, shutdown).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
