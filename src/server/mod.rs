mod handlers;
mod state;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::finder::SupermarketFinder;

pub fn build_router(finder: SupermarketFinder) -> Router {
    let state = Arc::new(AppState {
        finder: Arc::new(finder),
    });

    Router::new()
        .route("/api/supermarkets", get(handlers::supermarkets))
        .route("/api/cities", get(handlers::city_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, finder: SupermarketFinder) -> std::io::Result<()> {
    let app = build_router(finder);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!(addr = %addr, error = %e, "cannot bind");
        e
    })?;

    info!("supermarket finder listening on http://{}", addr);
    axum::serve(listener, app).await
}
