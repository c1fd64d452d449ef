pub mod handlers;
pub mod types;

use crate::{Error, Result, config::Config, hub::Hub};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .route("/ask/", post(handlers::ask))
        .route("/chatbot", post(handlers::ask))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn bind_address(config: &Config) -> Result<SocketAddr> {
    let host: IpAddr = config.server.host.parse().map_err(|e| {
        Error::config(format!("invalid server.host '{}': {}", config.server.host, e))
    })?;
    Ok(SocketAddr::new(host, config.server.port))
}

pub async fn run(config: Config) -> Result<()> {
    let hub = Hub::from_config(&config);

    let app_state = handlers::AppState {
        hub: Arc::new(hub),
        frontend_path: PathBuf::from(&config.server.frontend_path),
    };

    let app = router(app_state);

    let addr = bind_address(&config)?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
