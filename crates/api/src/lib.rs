//! HTTP server for the static data endpoint.
//!
//! Serves a single route, `GET /api/data`, answering with a fixed JSON
//! message. Unknown paths and methods, `OPTIONS` included, fall through
//! to axum's default 404 and 405 responses.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use common::Variant;
use tower_http::trace::TraceLayer;

/// Path of the one route this service exposes.
pub const DATA_PATH: &str = "/api/data";

/// Creates the Axum application router serving `variant`'s payload.
pub fn create_app(variant: Variant) -> Router {
    Router::new()
        .route(DATA_PATH, get(routes::data::get))
        .with_state(variant.payload())
        .layer(TraceLayer::new_for_http())
}
