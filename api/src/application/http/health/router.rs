use super::handlers::{
    get_health::{__path_get_health, get_health},
    get_root::get_root,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route("/", get(get_root))
        .route(&format!("{}/health", root_path), get(get_health))
}
