use axum::extract::State;
use catalog_core::domain::product::{
    entities::{NewProduct, ProductView},
    ports::ProductService,
    value_objects::CreateProductInput,
};

use crate::application::http::{
    product::validators::CreateProductValidator,
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
    tag = "product",
    summary = "Create product",
    description = "Creates a product. The product_id must be unique and the department, when given, must exist.",
    responses(
        (status = 201, body = ProductView),
        (status = 400, body = ApiErrorResponse, description = "Duplicate product_id or unknown department"),
        (status = 422, body = ApiErrorResponse, description = "Validation error")
    ),
    request_body = CreateProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<ProductView>, ApiError> {
    let product = NewProduct::try_from(payload).map_err(ApiError::from)?;
    let product = state
        .service
        .create_product(CreateProductInput { product })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(product))
}
