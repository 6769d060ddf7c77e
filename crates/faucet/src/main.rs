//! Faucet service binary

use clap::Parser;
use drip_common::utils::logging::{init_logging, LoggingConfig};
use drip_faucet::api::{
    can_claim_handler, claim_handler, configure_handler, credit_handler, health_handler,
    pause_handler, recover_handler, root_handler, status_handler, unpause_handler,
    withdraw_handler,
};
use drip_faucet::{FaucetService, ServiceConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Faucet service CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(long)]
    server_addr: Option<String>,

    /// Amount per claim (base units)
    #[arg(long)]
    claim_amount: Option<u128>,

    /// Cooldown between claims (seconds)
    #[arg(long)]
    claim_interval: Option<u64>,

    /// Daily distribution limit (base units)
    #[arg(long)]
    daily_limit: Option<u128>,

    /// Admin account (hex address)
    #[arg(long)]
    admin: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = LoggingConfig {
        level: if args.debug { "debug".to_string() } else { "info".to_string() },
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(|e| anyhow::anyhow!("logging init failed: {}", e))?;

    info!("Starting Drip Faucet Service v0.1.0");

    // Load configuration
    let mut config = ServiceConfig::from_env();

    // Override with CLI arguments
    if let Some(addr) = args.server_addr {
        config.server_addr = addr;
    }

    if let Some(amount) = args.claim_amount {
        config.faucet.claim_amount = amount;
    }

    if let Some(interval) = args.claim_interval {
        config.faucet.claim_interval_secs = interval;
    }

    if let Some(limit) = args.daily_limit {
        config.faucet.daily_limit = limit;
    }

    if let Some(admin) = args.admin {
        config.admin = drip_common::Address::from_hex(&admin)
            .ok_or_else(|| anyhow::anyhow!("invalid admin address: {}", admin))?;
    }

    info!("Configuration:");
    info!("  Server address: {}", config.server_addr);
    info!("  Claim amount: {}", config.faucet.claim_amount);
    info!("  Claim interval: {:?}", config.faucet.claim_interval());
    info!("  Daily limit: {}", config.faucet.daily_limit);
    info!("  Max supply: {}", config.max_supply);
    info!("  Holding account: {}", config.holding_account);
    info!("  Admin: {}", config.admin);

    // Create faucet service
    let service = Arc::new(FaucetService::new(&config)?);
    info!("Faucet service initialized");

    // Build router
    let mut app = axum::Router::new()
        .route("/", axum::routing::get(root_handler))
        .route("/health", axum::routing::get(health_handler))
        .route("/api/status", axum::routing::get(status_handler))
        .route("/api/claim", axum::routing::post(claim_handler))
        .route("/api/can_claim/:address", axum::routing::get(can_claim_handler))
        .route("/api/admin/configure", axum::routing::post(configure_handler))
        .route("/api/admin/withdraw", axum::routing::post(withdraw_handler))
        .route("/api/admin/credit", axum::routing::post(credit_handler))
        .route("/api/admin/recover", axum::routing::post(recover_handler))
        .route("/api/admin/pause", axum::routing::post(pause_handler))
        .route("/api/admin/unpause", axum::routing::post(unpause_handler))
        .with_state(service);

    // Add CORS if enabled
    if config.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        app = app.layer(cors);
        info!("CORS enabled");
    }

    // Start server
    let addr: SocketAddr = config.server_addr.parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down gracefully");
    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
