//! HTTP router - maps recipe routes to handlers and applies the middleware stack

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::api;
use crate::error::Error;
use crate::AppState;

/// Create the router serving the recipe API
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/health", get(api::health_check))
        .route("/recipes", get(api::list_recipes).post(api::create_recipe))
        .route("/recipes/{id}", put(api::update_recipe).delete(api::delete_recipe))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> Error {
    tracing::debug!("No route for {}", uri);
    Error::NotFound(format!("no route for {}", uri.path()))
}
