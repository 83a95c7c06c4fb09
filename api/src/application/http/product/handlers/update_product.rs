use axum::extract::State;
use catalog_core::domain::product::{
    entities::{ProductPatch, ProductView},
    ports::ProductService,
    value_objects::UpdateProductInput,
};

use crate::application::http::{
    product::validators::UpdateProductValidator,
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
    tag = "product",
    summary = "Update product",
    description = "Changes only the supplied fields. Sending null clears a nullable field.",
    params(
        ("id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductView),
        (status = 400, body = ApiErrorResponse, description = "Unknown department"),
        (status = 404, body = ApiErrorResponse, description = "Product not found"),
        (status = 422, body = ApiErrorResponse, description = "Validation error")
    ),
    request_body = UpdateProductValidator
)]
pub async fn update_product(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<ProductView>, ApiError> {
    let patch = ProductPatch::try_from(payload).map_err(ApiError::from)?;
    let product = state
        .service
        .update_product(UpdateProductInput { id, patch })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
