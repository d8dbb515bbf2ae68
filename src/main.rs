use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carefinder::config::AppConfig;
use carefinder::db;
use carefinder::handlers;
use carefinder::services::catalog::Catalog;
use carefinder::services::sessions::memory::MemorySessionStore;
use carefinder::services::sessions::sqlite::SqliteSessionStore;
use carefinder::services::sessions::SessionStore;
use carefinder::state::AppState;

const EXPIRY_INTERVAL: StdDuration = StdDuration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = Catalog::load(&config.hospitals_csv);

    let sessions: Arc<dyn SessionStore> = match config.session_store.as_str() {
        "memory" => {
            tracing::info!("using in-memory session store");
            Arc::new(MemorySessionStore::new())
        }
        _ => {
            tracing::info!("using SQLite session store (path: {})", config.database_url);
            let conn = db::init_db(&config.database_url)?;
            let store = Arc::new(SqliteSessionStore::new(
                Arc::new(Mutex::new(conn)),
                chrono::Duration::minutes(config.session_ttl_minutes),
            ));
            spawn_expiry(Arc::clone(&store));
            store
        }
    };

    let state = Arc::new(AppState { catalog, sessions });

    let app = Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn spawn_expiry(store: Arc<SqliteSessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EXPIRY_INTERVAL);
        loop {
            interval.tick().await;
            match store.expire_old_sessions() {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, "expired old sessions"),
                Err(e) => tracing::error!(error = %e, "failed to expire sessions"),
            }
        }
    });
}
