use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub health: String,
}

/// Entry point listing where the docs and health check live.
pub async fn get_root(State(state): State<AppState>) -> Result<Response<RootResponse>, ApiError> {
    let root_path = &state.args.server.root_path;

    Ok(Response::OK(RootResponse {
        message: "Welcome to the Catalog API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: format!("{}/docs", root_path),
        health: format!("{}/health", root_path),
    }))
}
