use axum::extract::State;
use catalog_core::domain::{
    common::pagination::Page,
    product::{entities::ProductView, ports::ProductService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub products: Vec<ProductView>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl From<Page<ProductView>> for GetProductsResponse {
    fn from(page: Page<ProductView>) -> Self {
        Self {
            products: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            has_prev: page.has_prev,
            has_next: page.has_next,
            prev_page: page.prev_page,
            next_page: page.next_page,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List products",
    description = "Lists products matching every supplied filter, sorted and paginated. Malformed filter values are ignored.",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number (default 1)"),
        ("per_page" = Option<u64>, Query, description = "Page size between 1 and 100 (default 20)"),
        ("search" = Option<String>, Query, description = "Substring of name, brand, category, sub category or description"),
        ("category" = Option<String>, Query, description = "Category substring"),
        ("sub_category" = Option<String>, Query, description = "Sub category substring"),
        ("brand" = Option<String>, Query, description = "Brand substring"),
        ("type" = Option<String>, Query, description = "Type substring"),
        ("department_id" = Option<i32>, Query, description = "Owning department"),
        ("min_price" = Option<f64>, Query, description = "Lowest sale price"),
        ("max_price" = Option<f64>, Query, description = "Highest sale price"),
        ("min_rating" = Option<f64>, Query, description = "Lowest rating"),
        ("in_stock" = Option<bool>, Query, description = "Only products with a sale price"),
        ("on_sale" = Option<bool>, Query, description = "Only products priced below market"),
        ("sort_by" = Option<String>, Query, description = "name, price, market_price, rating, category, brand, created_at, updated_at or id"),
        ("sort_order" = Option<String>, Query, description = "asc or desc (default desc)"),
    ),
    responses(
        (status = 200, body = GetProductsResponse),
        (status = 400, body = ApiErrorResponse, description = "Unknown department")
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let page = state
        .service
        .get_products(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse::from(page)))
}
