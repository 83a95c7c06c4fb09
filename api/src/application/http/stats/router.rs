use super::handlers::{
    get_department_stats::{__path_get_department_stats, get_department_stats},
    get_product_stats::{__path_get_product_stats, get_product_stats},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_product_stats))]
pub struct ProductStatsApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_department_stats))]
pub struct DepartmentStatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/products/stats/summary", root_path),
            get(get_product_stats),
        )
        .route(
            &format!("{}/departments/stats/summary", root_path),
            get(get_department_stats),
        )
}
