use chrono::{DateTime, Utc};
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, format_timestamp, generate_timestamp},
    department::entities::Department,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_id: String,
    pub product_name: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub r#type: Option<String>,
    pub sale_price: Option<Decimal>,
    pub market_price: Option<Decimal>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub product_id: String,
    pub product_name: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub r#type: Option<String>,
    pub sale_price: Option<Decimal>,
    pub market_price: Option<Decimal>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
}

/// Field changes for a partial update. The outer `Option` tells whether the
/// field was supplied, the inner one carries the new (possibly null) value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub category: Option<Option<String>>,
    pub sub_category: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub r#type: Option<Option<String>>,
    pub sale_price: Option<Option<Decimal>>,
    pub market_price: Option<Option<Decimal>>,
    pub rating: Option<Option<f64>>,
    pub description: Option<Option<String>>,
    pub department_id: Option<Option<i32>>,
}

impl Product {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(product_name) = patch.product_name {
            self.product_name = product_name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(sub_category) = patch.sub_category {
            self.sub_category = sub_category;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(r#type) = patch.r#type {
            self.r#type = r#type;
        }
        if let Some(sale_price) = patch.sale_price {
            self.sale_price = sale_price;
        }
        if let Some(market_price) = patch.market_price {
            self.market_price = market_price;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(department_id) = patch.department_id {
            self.department_id = department_id;
        }
        self.updated_at = generate_timestamp();
    }

    pub fn discount_percentage(&self) -> f64 {
        discount_percentage(self.market_price, self.sale_price)
    }

    pub fn is_on_sale(&self) -> bool {
        is_on_sale(self.market_price, self.sale_price)
    }
}

pub fn is_on_sale(market_price: Option<Decimal>, sale_price: Option<Decimal>) -> bool {
    matches!((market_price, sale_price), (Some(market), Some(sale)) if market > sale)
}

/// `round(((market - sale) / market) * 100, 2)` when both prices are known and
/// the product is actually discounted, `0` otherwise.
pub fn discount_percentage(market_price: Option<Decimal>, sale_price: Option<Decimal>) -> f64 {
    match (market_price, sale_price) {
        (Some(market), Some(sale)) if market > Decimal::ZERO && market > sale => {
            let percentage = ((market - sale) / market) * Decimal::ONE_HUNDRED;
            percentage
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Largest value the `NUMERIC(10, 2)` price columns hold.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

pub fn fits_price_column(price: Decimal) -> bool {
    price >= Decimal::ZERO && price <= max_price()
}

/// Converts a JSON price into the stored two-decimal representation.
/// Values the price columns cannot hold are a validation error.
pub fn price_from_f64(value: f64) -> Result<Decimal, CoreError> {
    Decimal::from_f64(value)
        .map(|price| price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .filter(|price| fits_price_column(*price))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Price {value} is outside the supported range 0 to {}",
                max_price()
            ))
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithDepartment {
    pub product: Product,
    pub department: Option<Department>,
}

/// Externally visible product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub id: i32,
    pub product_id: String,
    pub product_name: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub sale_price: Option<f64>,
    pub market_price: Option<f64>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    pub discount_percentage: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl ProductView {
    pub fn new(product: &Product, department: Option<&Department>) -> Self {
        Self {
            id: product.id,
            product_id: product.product_id.clone(),
            product_name: product.product_name.clone(),
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
            brand: product.brand.clone(),
            sale_price: product.sale_price.and_then(|p| p.to_f64()),
            market_price: product.market_price.and_then(|p| p.to_f64()),
            r#type: product.r#type.clone(),
            rating: product.rating,
            description: product.description.clone(),
            department_id: product.department_id,
            department_name: department.map(|d| d.name.clone()),
            discount_percentage: product.discount_percentage(),
            created_at: format_timestamp(&product.created_at),
            updated_at: format_timestamp(&product.updated_at),
        }
    }
}

impl From<ProductWithDepartment> for ProductView {
    fn from(value: ProductWithDepartment) -> Self {
        ProductView::new(&value.product, value.department.as_ref())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone;

    use super::*;

    pub fn product(id: i32, product_id: &str) -> Product {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        Product {
            id,
            product_id: product_id.to_string(),
            product_name: format!("Product {product_id}"),
            category: None,
            sub_category: None,
            brand: None,
            r#type: None,
            sale_price: None,
            market_price: None,
            rating: None,
            description: None,
            department_id: None,
            created_at: ts,
            updated_at: ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_discount_percentage_rounds_to_two_decimals() {
        assert_eq!(discount_percentage(Some(dec!(1299.99)), Some(dec!(999.99))), 23.08);
        assert_eq!(discount_percentage(Some(dec!(3.00)), Some(dec!(2.00))), 33.33);
        assert_eq!(discount_percentage(Some(dec!(100)), Some(dec!(50))), 50.0);
    }

    #[test]
    fn test_discount_percentage_is_zero_when_not_discounted() {
        assert_eq!(discount_percentage(None, Some(dec!(10))), 0.0);
        assert_eq!(discount_percentage(Some(dec!(10)), None), 0.0);
        assert_eq!(discount_percentage(Some(dec!(10)), Some(dec!(10))), 0.0);
        assert_eq!(discount_percentage(Some(dec!(10)), Some(dec!(12))), 0.0);
        assert_eq!(discount_percentage(Some(dec!(0)), Some(dec!(0))), 0.0);
    }

    #[test]
    fn test_discount_percentage_with_free_product() {
        assert_eq!(discount_percentage(Some(dec!(40)), Some(dec!(0))), 100.0);
    }

    #[test]
    fn test_price_from_f64_keeps_two_decimals() {
        assert_eq!(price_from_f64(19.99), Ok(dec!(19.99)));
        assert_eq!(price_from_f64(0.125), Ok(dec!(0.13)));
        assert_eq!(price_from_f64(99_999_999.99), Ok(dec!(99999999.99)));
    }

    #[test]
    fn test_price_from_f64_rejects_unstorable_values() {
        for value in [f64::NAN, 1e30, 1e9, 99_999_999.996, -0.5] {
            assert!(
                matches!(price_from_f64(value), Err(CoreError::Validation(_))),
                "{value}"
            );
        }
    }

    #[test]
    fn test_on_sale_requires_both_prices() {
        assert!(is_on_sale(Some(dec!(20)), Some(dec!(10))));
        assert!(!is_on_sale(Some(dec!(20)), None));
        assert!(!is_on_sale(None, Some(dec!(10))));
        assert!(!is_on_sale(Some(dec!(10)), Some(dec!(10))));
    }

    #[test]
    fn test_apply_patch_changes_only_supplied_fields() {
        let mut p = product(1, "SKU-1");
        p.brand = Some("Acme".to_string());
        p.sale_price = Some(dec!(10.00));
        let before = p.updated_at;

        p.apply(ProductPatch {
            product_name: Some("Renamed".to_string()),
            sale_price: Some(Some(dec!(12.50))),
            category: Some(None),
            ..Default::default()
        });

        assert_eq!(p.product_name, "Renamed");
        assert_eq!(p.sale_price, Some(dec!(12.50)));
        assert_eq!(p.category, None);
        assert_eq!(p.brand.as_deref(), Some("Acme"));
        assert!(p.updated_at > before);
    }

    #[test]
    fn test_view_resolves_department_and_formats_timestamps() {
        let mut p = product(7, "SKU-7");
        p.market_price = Some(dec!(80));
        p.sale_price = Some(dec!(60));
        p.department_id = Some(3);
        let department = Department {
            id: 3,
            name: "Kitchen".to_string(),
            description: None,
            created_at: p.created_at,
            updated_at: p.updated_at,
        };

        let view = ProductView::new(&p, Some(&department));
        assert_eq!(view.department_name.as_deref(), Some("Kitchen"));
        assert_eq!(view.discount_percentage, 25.0);
        assert_eq!(view.sale_price, Some(60.0));
        assert_eq!(view.created_at, "2024-01-15T09:30:00Z");

        let orphan = ProductView::new(&p, None);
        assert_eq!(orphan.department_name, None);
    }

    #[test]
    fn test_view_serializes_type_field() {
        let mut p = product(1, "SKU-1");
        p.r#type = Some("Gadget".to_string());
        let json = serde_json::to_value(ProductView::new(&p, None)).unwrap();
        assert_eq!(json["type"], "Gadget");
        assert_eq!(json["discount_percentage"], 0.0);
    }
}
