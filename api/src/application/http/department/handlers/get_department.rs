use axum::extract::State;
use catalog_core::domain::department::{
    entities::DepartmentView, ports::DepartmentService, value_objects::GetDepartmentInput,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "department",
    summary = "Get department",
    params(
        ("id" = i32, Path, description = "Department ID"),
    ),
    responses(
        (status = 200, body = DepartmentView),
        (status = 404, body = ApiErrorResponse, description = "Department not found")
    ),
)]
pub async fn get_department(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<DepartmentView>, ApiError> {
    let department = state
        .service
        .get_department(GetDepartmentInput { id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(department))
}
