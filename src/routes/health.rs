use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Re-runs the template/catalog integrity check so a deployment with
/// inconsistent compiled-in data reports not-ready instead of serving
/// broken plans.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    match app.plan_book.validate(&app.catalog) {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(err) => {
            tracing::error!("Readiness check failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "plan_configuration_invalid"
                })),
            )
        }
    }
}
