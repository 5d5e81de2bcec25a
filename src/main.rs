use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use catalog_search::api;
use catalog_search::config::Config;
use catalog_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Catalog: {}", config.catalog_path().display());
    tracing::info!("Threshold policy: {:?}", config.threshold_policy);

    let state = AppState::new(config.clone())?;

    // No CORS layer: the search page is served from the same origin.
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/list", get(api::list::list))
        .route("/health", get(api::health::health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
