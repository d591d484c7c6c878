use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_health_contracts::{HealthService, HealthStatus};

use crate::models::ApiResponse;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { timestamp } = service.get_status().await;

    Json(ApiResponse::success("Server is running").with_timestamp(timestamp)).into_response()
}
