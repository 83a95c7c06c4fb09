//! Row cleaning for the CSV bulk loader.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    product::entities::{NewProduct, fits_price_column},
    seed::value_objects::SeedRecord,
};

pub const DEFAULT_PRODUCT_NAME: &str = "Unknown Product";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_BRAND: &str = "Unknown Brand";

const MAX_NAME_LENGTH: usize = 500;
const MAX_LABEL_LENGTH: usize = 255;
const MAX_RATING: f64 = 5.0;

/// Turns a raw row into an insertable product. The row's file position is
/// the business key when the row has no `uniq_id`.
pub fn clean_record(record: SeedRecord) -> NewProduct {
    let position = record.position;
    let product_id = present(record.uniq_id).unwrap_or_else(|| format!("{position:06}"));

    NewProduct {
        product_id: truncate(product_id, MAX_LABEL_LENGTH),
        product_name: truncate(
            present(record.product_name).unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            MAX_NAME_LENGTH,
        ),
        category: Some(truncate(
            present(record.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            MAX_LABEL_LENGTH,
        )),
        sub_category: Some(truncate(
            present(record.sub_category).unwrap_or_default(),
            MAX_LABEL_LENGTH,
        )),
        brand: Some(truncate(
            present(record.brand).unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            MAX_LABEL_LENGTH,
        )),
        r#type: Some(present(record.r#type).unwrap_or_default()),
        sale_price: parse_price(record.sale_price.as_deref()),
        market_price: parse_price(record.market_price.as_deref()),
        rating: parse_rating(record.rating.as_deref()),
        description: Some(present(record.description).unwrap_or_default()),
        department_id: None,
    }
}

/// Missing prices become `0`; currency symbols and thousands separators are
/// stripped; anything still unparsable, or too large for the price column,
/// becomes `None`.
pub fn parse_price(raw: Option<&str>) -> Option<Decimal> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Some(Decimal::ZERO);
    };

    let cleaned: String = raw.chars().filter(|c| *c != '₹' && *c != ',').collect();
    match cleaned.trim().parse::<Decimal>() {
        Ok(price) if fits_price_column(price.round_dp(2)) => Some(price.round_dp(2)),
        _ => {
            debug!(value = raw, "unparsable price");
            None
        }
    }
}

/// Missing ratings become `0`; parsed ratings are clamped into `[0, 5]`.
pub fn parse_rating(raw: Option<&str>) -> Option<f64> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Some(0.0);
    };

    match raw.parse::<f64>() {
        Ok(rating) if rating.is_finite() => Some(rating.clamp(0.0, MAX_RATING)),
        _ => {
            debug!(value = raw, "unparsable rating");
            None
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn truncate(value: String, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value
    } else {
        value.chars().take(max_chars).collect()
    }
}
