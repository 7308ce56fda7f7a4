use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::pages::index_get))
        .route("/api/instances", get(handlers::instances::instances_get))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move {
                    (
                        [
                            (CONTENT_TYPE, "text/css"),
                            (CACHE_CONTROL, "public, max-age=3600"),
                        ],
                        css,
                    )
                }
            }),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
