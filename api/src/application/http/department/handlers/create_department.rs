use axum::extract::State;
use catalog_core::domain::department::{
    entities::DepartmentView, ports::DepartmentService, value_objects::CreateDepartmentInput,
};

use crate::application::http::{
    department::validators::CreateDepartmentValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "department",
    summary = "Create department",
    responses(
        (status = 201, body = DepartmentView),
        (status = 400, body = ApiErrorResponse, description = "Name already taken"),
        (status = 422, body = ApiErrorResponse, description = "Validation error")
    ),
    request_body = CreateDepartmentValidator
)]
pub async fn create_department(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateDepartmentValidator>,
) -> Result<Response<DepartmentView>, ApiError> {
    let department = state
        .service
        .create_department(CreateDepartmentInput {
            name: payload.name,
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(department))
}
