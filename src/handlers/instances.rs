use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::ec2::flatten_reservations;
use crate::models::AppState;

/// GET /api/instances — every instance visible to the configured
/// credentials, flattened across reservations in upstream order.
pub async fn instances_get(State(state): State<AppState>) -> Response {
    match state.inventory.describe_all().await {
        Ok(reservations) => {
            let data = flatten_reservations(&reservations);
            Json(serde_json::json!({ "data": data })).into_response()
        }
        Err(e) => {
            tracing::error!(%e, "Failed to describe instances");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "data": "Error getting instances" })),
            )
                .into_response()
        }
    }
}
