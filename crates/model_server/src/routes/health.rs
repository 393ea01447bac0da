//! Service info and health routes.

use axum::{Json, http::StatusCode, http::Uri};
use web_types::{ApiError, EndpointMap, HealthResponse, ServiceInfo};

/// GET / - Describe the service and its endpoints.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Startup Profit Predictor API".to_string(),
        version: "1.0.0".to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            predict: "/predict".to_string(),
        },
    })
}

/// GET /health - Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::with_code(
            format!("Route not found: {}", uri.path()),
            "NOT_FOUND",
        )),
    )
}
