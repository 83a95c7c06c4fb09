use axum::extract::State;
use catalog_core::domain::product::{ports::ProductService, value_objects::DistinctField};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/categories/list",
    tag = "product",
    summary = "List categories",
    description = "Distinct non-empty product categories in alphabetical order.",
    responses(
        (status = 200, body = Vec<String>)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<Vec<String>>, ApiError> {
    let categories = state
        .service
        .get_distinct_values(DistinctField::Category)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(categories))
}
