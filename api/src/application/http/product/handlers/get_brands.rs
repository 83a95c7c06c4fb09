use axum::extract::State;
use catalog_core::domain::product::{ports::ProductService, value_objects::DistinctField};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/brands/list",
    tag = "product",
    summary = "List brands",
    description = "Distinct non-empty product brands in alphabetical order.",
    responses(
        (status = 200, body = Vec<String>)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
) -> Result<Response<Vec<String>>, ApiError> {
    let brands = state
        .service
        .get_distinct_values(DistinctField::Brand)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(brands))
}
