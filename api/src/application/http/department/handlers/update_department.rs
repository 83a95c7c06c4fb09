use axum::extract::State;
use catalog_core::domain::department::{
    entities::DepartmentView, ports::DepartmentService, value_objects::UpdateDepartmentInput,
};

use crate::application::http::{
    department::validators::UpdateDepartmentValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ApiPath, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "department",
    summary = "Update department",
    description = "Changes only the supplied fields. A new name must not belong to another department.",
    params(
        ("id" = i32, Path, description = "Department ID"),
    ),
    responses(
        (status = 200, body = DepartmentView),
        (status = 400, body = ApiErrorResponse, description = "Name already taken"),
        (status = 404, body = ApiErrorResponse, description = "Department not found"),
        (status = 422, body = ApiErrorResponse, description = "Validation error")
    ),
    request_body = UpdateDepartmentValidator
)]
pub async fn update_department(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateDepartmentValidator>,
) -> Result<Response<DepartmentView>, ApiError> {
    let department = state
        .service
        .update_department(UpdateDepartmentInput {
            id,
            name: payload.name,
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(department))
}
