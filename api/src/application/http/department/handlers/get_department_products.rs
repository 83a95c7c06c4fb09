use axum::extract::{Query, State};
use catalog_core::domain::{
    common::pagination::PageRequest,
    department::{
        entities::DepartmentSummary,
        ports::DepartmentService,
        value_objects::{DepartmentProducts, GetDepartmentProductsInput},
    },
    product::entities::ProductView,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size between 1 and 100 (default 20).
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDepartmentProductsResponse {
    pub department: DepartmentSummary,
    pub products: Vec<ProductView>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<DepartmentProducts> for GetDepartmentProductsResponse {
    fn from(value: DepartmentProducts) -> Self {
        let page = value.products;
        Self {
            department: value.department,
            products: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            has_prev: page.has_prev,
            has_next: page.has_next,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{id}/products",
    tag = "department",
    summary = "List department products",
    description = "Products owned by the department, newest first.",
    params(
        ("id" = i32, Path, description = "Department ID"),
        PageQuery
    ),
    responses(
        (status = 200, body = GetDepartmentProductsResponse),
        (status = 404, body = ApiErrorResponse, description = "Department not found")
    ),
)]
pub async fn get_department_products(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response<GetDepartmentProductsResponse>, ApiError> {
    let products = state
        .service
        .get_department_products(GetDepartmentProductsInput {
            id,
            page: PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref()),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDepartmentProductsResponse::from(products)))
}
