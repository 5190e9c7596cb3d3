use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "telemetry": "operational",
            "guard": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
