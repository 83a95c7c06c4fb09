use std::{collections::HashMap, convert::Infallible};

use axum::{extract::FromRequestParts, http::request::Parts};
use catalog_core::domain::product::value_objects::ProductQuery;

/// Extracts the product listing query (filters, sort and pagination).
///
/// Parsing never rejects a request: malformed values fall back to their
/// defaults or drop the single criterion they belong to.
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub ProductQuery);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryParamsExtractor(ProductQuery::from_query_map(&query_map)))
    }
}
