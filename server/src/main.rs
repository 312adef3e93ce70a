use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use todo_server::{Backend, Config, SharedStore};
use todo_store::{MemoryStore, PgStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows every store operation.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let store: SharedStore = match config.backend {
        Backend::Memory => Arc::new(MemoryStore::new()),
        Backend::Postgres => {
            let db = config.db();
            let store = PgStore::connect(&db)
                .await
                .with_context(|| format!("connecting to {db:?}"))?;
            Arc::new(store)
        }
    };

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    info!(addr = %config.listen, "listening");
    todo_server::run(listener, store).await?;
    Ok(())
}
