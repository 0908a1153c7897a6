//! shaboxd — the shabox daemon.
//!
//! Loads configuration, opens the SQLite-backed message store (running
//! migrations), and serves the /messages REST API.

use shabox_api::config::DaemonConfig;
use shabox_api::state::AppState;
use shabox_store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = DaemonConfig::load()?;

    let dbfile = config.sqlite.resolve_dbfile();
    tracing::info!(db = %dbfile.display(), "opening message store");
    let store = SqliteStore::open(&dbfile)?;

    let state = AppState::new(store);
    let app = shabox_api::app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "shaboxd listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
