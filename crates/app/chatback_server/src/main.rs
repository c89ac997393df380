//! Chatback API server binary.
//!
//! Serves `POST /message` until interrupted with Ctrl-C.

use chatback_api::config::{ApiConfig, parse_origins};
use clap::Parser;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "chatback_server", version, about = "Chatback API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Comma-separated CORS origins. Any origin is allowed when unset.
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", default_value = "")]
    allowed_origins: String,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        ApiConfig {
            bind_addr: format!("{}:{}", self.host, self.port),
            allowed_origins: parse_origins(&self.allowed_origins),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Request failures are reported here, on stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatback_api=debug,chatback_core=debug".into()),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        version = chatback_core::version(),
        allowed_origins = ?config.allowed_origins,
        "starting chatback_server"
    );

    let app = chatback_api::router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C, shutting down"),
        Err(e) => warn!("failed to listen for Ctrl-C: {e}"),
    }
}
