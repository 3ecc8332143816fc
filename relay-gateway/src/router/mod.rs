use crate::{logic::run, server::AppState};
use axum::{handler::HandlerWithoutStateExt, response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub async fn get_router(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let assets =
        ServeDir::new(&state.config.static_dir).not_found_service(not_found_handler.into_service());

    Router::new()
        .nest("/api", run::get_router())
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", })),
    )
}
