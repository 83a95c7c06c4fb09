use rust_decimal::Decimal;
use sea_orm::{ActiveValue::Set, QueryResult};

use crate::{
    domain::{
        department::entities::Department,
        product::entities::{NewProduct, Product, ProductWithDepartment},
        stats::value_objects::{NamedCount, PriceBucket, ProductTotals},
    },
    entity::{departments, products},
};

impl From<&products::Model> for Product {
    fn from(model: &products::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id.clone(),
            product_name: model.product_name.clone(),
            category: model.category.clone(),
            sub_category: model.sub_category.clone(),
            brand: model.brand.clone(),
            r#type: model.product_type.clone(),
            sale_price: model.sale_price,
            market_price: model.market_price,
            rating: model.rating,
            description: model.description.clone(),
            department_id: model.department_id,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_with_department(
    (product, department): (products::Model, Option<departments::Model>),
) -> ProductWithDepartment {
    ProductWithDepartment {
        product: Product::from(product),
        department: department.map(Department::from),
    }
}

pub fn to_active_model(product: NewProduct) -> products::ActiveModel {
    let now = crate::domain::common::generate_timestamp().fixed_offset();
    products::ActiveModel {
        product_id: Set(product.product_id),
        product_name: Set(product.product_name),
        category: Set(product.category),
        sub_category: Set(product.sub_category),
        brand: Set(product.brand),
        product_type: Set(product.r#type),
        sale_price: Set(product.sale_price),
        market_price: Set(product.market_price),
        rating: Set(product.rating),
        description: Set(product.description),
        department_id: Set(product.department_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// Reads a `COUNT(..)` column; a missing or negative value counts as zero.
pub fn count_column(row: &QueryResult, column: &str) -> u64 {
    row.try_get::<i64>("", column)
        .map(|count| count.max(0) as u64)
        .unwrap_or(0)
}

pub fn totals_from_row(row: &QueryResult) -> ProductTotals {
    ProductTotals {
        total_products: count_column(row, "total_products"),
        products_with_prices: count_column(row, "products_with_prices"),
        products_with_ratings: count_column(row, "products_with_ratings"),
        products_with_departments: count_column(row, "products_with_departments"),
        products_on_sale: count_column(row, "products_on_sale"),
        average_price: row.try_get::<Option<Decimal>>("", "average_price").ok().flatten(),
        min_price: row.try_get::<Option<Decimal>>("", "min_price").ok().flatten(),
        max_price: row.try_get::<Option<Decimal>>("", "max_price").ok().flatten(),
        average_rating: row.try_get::<Option<f64>>("", "average_rating").ok().flatten(),
        min_rating: row.try_get::<Option<f64>>("", "min_rating").ok().flatten(),
        max_rating: row.try_get::<Option<f64>>("", "max_rating").ok().flatten(),
    }
}

pub fn named_count_from_row(row: &QueryResult) -> Option<NamedCount> {
    Some(NamedCount {
        name: row.try_get("", "name").ok()?,
        count: count_column(row, "count"),
    })
}

/// Bucket rows carry the bucket's position in [`PriceBucket::ALL`].
pub fn bucket_count_from_row(row: &QueryResult) -> Option<(PriceBucket, u64)> {
    let position: i32 = row.try_get("", "bucket").ok()?;
    let bucket = PriceBucket::ALL.get(usize::try_from(position).ok()?)?;

    Some((*bucket, count_column(row, "count")))
}
