//! Standalone API server binary
//!
//! Serves the fieldwork HTTP contract on `FIELDWORK_BIND` (defaults to
//! `127.0.0.1:8750`) so the TUI has something to talk to.

use anyhow::Result;
use fieldwork::server::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldwork=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    fieldwork::server::run(ServerConfig::from_env()).await?;
    Ok(())
}
