use axum::extract::State;
use catalog_core::domain::product::{
    entities::ProductView, ports::ProductService, value_objects::GetProductInput,
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
    tag = "product",
    summary = "Get product",
    description = "Retrieves one product with its department name and discount.",
    params(
        ("id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductView),
        (status = 404, body = ApiErrorResponse, description = "Product not found")
    ),
)]
pub async fn get_product(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Response<ProductView>, ApiError> {
    let product = state
        .service
        .get_product(GetProductInput { id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
