use axum::extract::{Query, State};
use catalog_core::domain::product::ports::ProductService;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchSuggestionsQuery {
    /// Partial category or brand, at least 2 characters.
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/search/suggestions",
    tag = "product",
    summary = "Search suggestions",
    description = "Up to 5 categories and brands containing the term, categories first.",
    params(SearchSuggestionsQuery),
    responses(
        (status = 200, body = Vec<String>)
    ),
)]
pub async fn get_search_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SearchSuggestionsQuery>,
) -> Result<Response<Vec<String>>, ApiError> {
    let suggestions = state
        .service
        .get_search_suggestions(query.q.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestions))
}
