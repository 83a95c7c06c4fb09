use axum::extract::State;
use catalog_core::domain::product::{ports::ProductService, value_objects::DeleteProductInput};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse, ApiPath},
        response::{MessageResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "product",
    summary = "Delete product",
    params(
        ("id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, body = ApiErrorResponse, description = "Product not found")
    ),
)]
pub async fn delete_product(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<MessageResponse>, ApiError> {
    state
        .service
        .delete_product(DeleteProductInput { id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageResponse::new(
        "Product deleted successfully",
    )))
}
