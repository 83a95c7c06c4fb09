use axum::extract::State;
use catalog_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub response_time_ms: u64,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Reports whether the database answers.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = ApiErrorResponse, description = "Database unreachable")
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "healthy".to_string(),
        database: status.database,
        response_time_ms: status.response_time_ms,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
