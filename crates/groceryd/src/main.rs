//! groceryd — the grocery list HTTP service.
//!
//! Single binary that owns the in-memory grocery list for its lifetime and
//! serves the grocery list API over HTTP. The list starts empty on every
//! start; nothing is persisted.
//!
//! # Usage
//!
//! ```text
//! groceryd --port 3000
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "groceryd", about = "Grocery list HTTP service")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "info,groceryd=debug,grocery_store=debug,grocery_api=debug"
                        .parse()
                        .unwrap()
                }),
        )
        .init();

    let cli = Cli::parse();

    // The store is created here and handed to the router; handlers receive
    // it through axum state rather than any process-global.
    let store = grocery_store::GroceryStore::new();
    let router = grocery_api::build_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    info!(%addr, "grocery list service starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("grocery list service stopped");
    Ok(())
}
