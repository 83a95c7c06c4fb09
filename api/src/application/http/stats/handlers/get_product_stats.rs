use axum::extract::{Query, State};
use catalog_core::domain::stats::{
    ports::StatsService,
    value_objects::{GetProductStatsInput, ProductStats},
};
use serde::Deserialize;
use tracing::warn;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductStatsQuery {
    /// Restricts the figures to one department's products.
    pub department_id: Option<String>,
}

impl ProductStatsQuery {
    fn department_id(&self) -> Option<i32> {
        let raw = self.department_id.as_deref().map(str::trim)?;
        if raw.is_empty() {
            return None;
        }

        match raw.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(department_id = raw, "ignoring malformed stats scope");
                None
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/stats/summary",
    tag = "product",
    summary = "Product statistics",
    description = "Counts, averages, ranges, top categories and brands and the price histogram. Degrades to zeroed figures when the data cannot be read.",
    params(ProductStatsQuery),
    responses(
        (status = 200, body = ProductStats),
        (status = 400, body = ApiErrorResponse, description = "Unknown department")
    ),
)]
pub async fn get_product_stats(
    State(state): State<AppState>,
    Query(query): Query<ProductStatsQuery>,
) -> Result<Response<ProductStats>, ApiError> {
    let stats = state
        .service
        .get_product_stats(GetProductStatsInput {
            department_id: query.department_id(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
