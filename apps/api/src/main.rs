use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use readiness_api::config::Config;
use readiness_api::db::{create_pool, ensure_schema};
use readiness_api::routes::build_router;
use readiness_api::state::AppState;
use readiness_api::store::{
    AnalysisStore, InMemoryAnalysisStore, InMemoryJobTrackerStore, JobTrackerStore,
    PgAnalysisStore, PgJobTrackerStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    let (store, jobs): (Arc<dyn AnalysisStore>, Arc<dyn JobTrackerStore>) =
        match &config.database_url {
            Some(url) => {
                let pool = create_pool(url).await?;
                ensure_schema(&pool).await?;
                info!(limit = config.history_limit, "Using PostgreSQL stores");
                (
                    Arc::new(PgAnalysisStore::new(pool.clone(), config.history_limit)),
                    Arc::new(PgJobTrackerStore::new(pool)),
                )
            }
            None => {
                info!(
                    limit = config.history_limit,
                    "DATABASE_URL not set, using in-memory stores"
                );
                (
                    Arc::new(InMemoryAnalysisStore::new(config.history_limit)),
                    Arc::new(InMemoryJobTrackerStore::new()),
                )
            }
        };

    let state = AppState {
        store,
        jobs,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
