//! Static data endpoint.

use axum::Json;
use axum::extract::State;
use common::DataPayload;

/// GET /api/data — returns the fixed payload for this deployment.
pub async fn get(State(payload): State<DataPayload>) -> Json<DataPayload> {
    Json(payload)
}
