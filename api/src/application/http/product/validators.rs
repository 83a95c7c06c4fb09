use catalog_core::domain::{
    common::entities::app_errors::CoreError,
    product::entities::{NewProduct, ProductPatch, price_from_f64},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 1, max = 255, message = "product_id must be 1 to 255 characters"))]
    pub product_id: String,

    #[validate(length(min = 1, max = 500, message = "product_name must be 1 to 500 characters"))]
    pub product_name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "category must be at most 255 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "sub_category must be at most 255 characters"))]
    pub sub_category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "brand must be at most 255 characters"))]
    pub brand: Option<String>,

    #[serde(default, rename = "type")]
    #[validate(length(max = 255, message = "type must be at most 255 characters"))]
    pub r#type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 99999999.99, message = "sale_price must be between 0 and 99999999.99"))]
    pub sale_price: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 99999999.99, message = "market_price must be between 0 and 99999999.99"))]
    pub market_price: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub department_id: Option<i32>,
}

impl TryFrom<CreateProductValidator> for NewProduct {
    type Error = CoreError;

    fn try_from(payload: CreateProductValidator) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: payload.product_id,
            product_name: payload.product_name,
            category: payload.category,
            sub_category: payload.sub_category,
            brand: payload.brand,
            r#type: payload.r#type,
            sale_price: payload.sale_price.map(price_from_f64).transpose()?,
            market_price: payload.market_price.map(price_from_f64).transpose()?,
            rating: payload.rating,
            description: payload.description,
            department_id: payload.department_id,
        })
    }
}

/// Every field is optional. A field set to `null` clears the stored value,
/// an absent field leaves it untouched.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 500, message = "product_name must be 1 to 500 characters"))]
    pub product_name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255, message = "category must be at most 255 characters"))]
    pub category: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255, message = "sub_category must be at most 255 characters"))]
    pub sub_category: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 255, message = "brand must be at most 255 characters"))]
    pub brand: Option<Option<String>>,

    #[serde(default, rename = "type", deserialize_with = "double_option")]
    #[validate(length(max = 255, message = "type must be at most 255 characters"))]
    pub r#type: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0.0, max = 99999999.99, message = "sale_price must be between 0 and 99999999.99"))]
    pub sale_price: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0.0, max = 99999999.99, message = "market_price must be between 0 and 99999999.99"))]
    pub market_price: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub department_id: Option<Option<i32>>,
}

impl TryFrom<UpdateProductValidator> for ProductPatch {
    type Error = CoreError;

    fn try_from(payload: UpdateProductValidator) -> Result<Self, Self::Error> {
        Ok(Self {
            product_name: payload.product_name,
            category: payload.category,
            sub_category: payload.sub_category,
            brand: payload.brand,
            r#type: payload.r#type,
            sale_price: payload.sale_price.map(nullable_price).transpose()?,
            market_price: payload.market_price.map(nullable_price).transpose()?,
            rating: payload.rating,
            description: payload.description,
            department_id: payload.department_id,
        })
    }
}

fn nullable_price(value: Option<f64>) -> Result<Option<Decimal>, CoreError> {
    value.map(price_from_f64).transpose()
}

/// Keeps an explicit `null` apart from a missing field.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
