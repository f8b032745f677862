//! flowtrace-server: serves the simulation engine over HTTP.
//!
//! Routes:
//!   POST /simulate    — validate + simulate a workflow graph
//!   GET  /automations — list available automated actions
//!
//! Configuration comes from the environment (a `.env` file is honored):
//!   FLOWTRACE_ADDR — bind address, default 127.0.0.1:4000
//!   RUST_LOG       — tracing filter, default info

use std::net::SocketAddr;

use tokio::net::TcpListener;

use flowtrace::{service, telemetry};

const DEFAULT_ADDR: &str = "127.0.0.1:4000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let addr: SocketAddr = std::env::var("FLOWTRACE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Serving on http://{addr} (POST /simulate, GET /automations)");

    axum::serve(listener, service::router().into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
