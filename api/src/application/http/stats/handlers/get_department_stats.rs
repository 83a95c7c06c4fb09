use axum::extract::State;
use catalog_core::domain::stats::{ports::StatsService, value_objects::DepartmentStats};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/stats/summary",
    tag = "department",
    summary = "Department statistics",
    description = "Per-department product counts, prices and ratings, busiest departments first.",
    responses(
        (status = 200, body = DepartmentStats)
    ),
)]
pub async fn get_department_stats(
    State(state): State<AppState>,
) -> Result<Response<DepartmentStats>, ApiError> {
    let stats = state.service.get_department_stats().await;

    Ok(Response::OK(stats))
}
