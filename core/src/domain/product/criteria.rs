//! Product filter criteria.
//!
//! Raw query values are parsed leniently: a malformed number drops that one
//! criterion (with a warning) instead of failing the whole request.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

const MAX_SEARCH_LENGTH: usize = 100;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static LIKE_METACHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[%_\\]").expect("valid regex"));

/// Every supplied criterion must hold for a product to match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    /// Matched against name, brand, category, sub category and description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub r#type: Option<String>,
    pub department_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub in_stock: bool,
    pub on_sale: bool,
}

impl ProductCriteria {
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let text = |key: &str| non_empty(query_map.get(key));

        Self {
            search: text("search").and_then(|s| clean_search_term(&s)),
            category: text("category"),
            sub_category: text("sub_category"),
            brand: text("brand"),
            r#type: text("type"),
            department_id: text("department_id").and_then(|v| parse_or_warn("department_id", &v)),
            min_price: text("min_price").and_then(|v| parse_or_warn("min_price", &v)),
            max_price: text("max_price").and_then(|v| parse_or_warn("max_price", &v)),
            min_rating: text("min_rating")
                .and_then(|v| parse_or_warn::<f64>("min_rating", &v))
                .filter(|r| r.is_finite()),
            in_stock: text("in_stock").is_some_and(|v| is_truthy(&v)),
            on_sale: text("on_sale").is_some_and(|v| is_truthy(&v)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_or_warn<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(criterion = name, value, "ignoring malformed product filter");
            None
        }
    }
}

/// `true`, `1` and `yes` (any case) switch a flag filter on.
pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Normalises a free-text search term: collapses whitespace, strips LIKE
/// metacharacters and caps the length. Returns `None` when nothing is left.
pub fn clean_search_term(term: &str) -> Option<String> {
    let collapsed = WHITESPACE.replace_all(term.trim(), " ");
    let stripped = LIKE_METACHARACTERS.replace_all(&collapsed, "");
    let cleaned: String = stripped.trim().chars().take(MAX_SEARCH_LENGTH).collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
