use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use booking_server::config::AppConfig;
use booking_server::database::init_db;
use booking_server::state::AppState;
use booking_server::store::{EntityStore, MemoryStore, SeaOrmStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn EntityStore> = if config.database.is_memory() {
        info!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let db = init_db(&config.database)
            .await
            .context("Failed to initialize database")?;
        Arc::new(SeaOrmStore::new(db))
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let app = booking_server::build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
