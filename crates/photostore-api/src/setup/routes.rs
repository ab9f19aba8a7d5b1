//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_size = state.config.max_body_size_bytes;

    let api_routes = Router::new()
        .route("/", get(handlers::health::health))
        .route("/assets", get(handlers::assets_list::list_assets))
        .route("/image/{assetid}", get(handlers::image_get::get_image))
        .route("/image", post(handlers::image_upload::upload_image))
        .route("/image-to-pdf", post(handlers::image_to_pdf::image_to_pdf))
        .route(
            "/extract-text-from-image",
            post(handlers::text_extract::extract_text),
        )
        .with_state(state);

    api_routes
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(CorsLayer::permissive())
}
