use axum::extract::{Query, State};
use catalog_core::domain::{
    common::pagination::{Page, PageRequest},
    department::{
        entities::DepartmentView, ports::DepartmentService, value_objects::GetDepartmentsFilter,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Values stay raw strings so a malformed number falls back to its default.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetDepartmentsQuery {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size between 1 and 100 (default 20).
    pub per_page: Option<String>,
    /// Case-insensitive substring of the department name.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDepartmentsResponse {
    pub departments: Vec<DepartmentView>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<Page<DepartmentView>> for GetDepartmentsResponse {
    fn from(page: Page<DepartmentView>) -> Self {
        Self {
            departments: page.items,
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
    path = "",
    tag = "department",
    summary = "List departments",
    description = "Departments ordered by name, each with its product count.",
    params(GetDepartmentsQuery),
    responses(
        (status = 200, body = GetDepartmentsResponse)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    Query(query): Query<GetDepartmentsQuery>,
) -> Result<Response<GetDepartmentsResponse>, ApiError> {
    let filter = GetDepartmentsFilter::new(
        query.search.as_deref(),
        PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref()),
    );

    let page = state
        .service
        .get_departments(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDepartmentsResponse::from(page)))
}
