use axum::extract::{Query, State};
use catalog_core::domain::{
    department::{ports::DepartmentService, value_objects::DeleteDepartmentInput},
    product::criteria::is_truthy,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse, ApiPath},
        response::{MessageResponse, Response},
    },
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DeleteDepartmentQuery {
    /// Detach the department's products instead of refusing the delete.
    pub force: Option<String>,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "department",
    summary = "Delete department",
    description = "Refuses to delete a department that still owns products unless force=true, in which case the products keep existing without a department.",
    params(
        ("id" = i32, Path, description = "Department ID"),
        DeleteDepartmentQuery
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = ApiErrorResponse, description = "Department still owns products"),
        (status = 404, body = ApiErrorResponse, description = "Department not found")
    ),
)]
pub async fn delete_department(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    Query(query): Query<DeleteDepartmentQuery>,
) -> Result<Response<MessageResponse>, ApiError> {
    let force = query.force.as_deref().is_some_and(is_truthy);

    state
        .service
        .delete_department(DeleteDepartmentInput { id, force })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Department deleted successfully",
    )))
}
