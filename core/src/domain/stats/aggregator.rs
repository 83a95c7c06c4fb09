//! Turns store-computed aggregates into the published statistics shapes.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::domain::{
    common::round2,
    stats::value_objects::{
        DepartmentAggregate, DepartmentBreakdown, DepartmentStats, PriceBucket, PriceBucketCount,
        ProductAggregates, ProductStats, ValueRange,
    },
};

pub fn summarize_products(aggregates: ProductAggregates, total_departments: u64) -> ProductStats {
    let totals = aggregates.totals;

    ProductStats {
        total_products: totals.total_products,
        total_departments,
        products_with_prices: totals.products_with_prices,
        products_with_ratings: totals.products_with_ratings,
        products_with_departments: totals.products_with_departments,
        products_on_sale: totals.products_on_sale,
        average_price: decimal_to_f64(totals.average_price),
        price_range: match (totals.min_price, totals.max_price) {
            (Some(min), Some(max)) => ValueRange {
                min: decimal_to_f64(Some(min)),
                max: decimal_to_f64(Some(max)),
            },
            _ => ValueRange::default(),
        },
        average_rating: totals.average_rating.map(round2).unwrap_or(0.0),
        rating_range: match (totals.min_rating, totals.max_rating) {
            (Some(min), Some(max)) => ValueRange { min, max },
            _ => ValueRange::default(),
        },
        rated_products: totals.products_with_ratings,
        top_categories: aggregates.top_categories,
        top_brands: aggregates.top_brands,
        price_distribution: price_distribution(&aggregates.price_buckets),
    }
}

pub fn summarize_departments(rows: Vec<DepartmentAggregate>) -> DepartmentStats {
    let mut breakdown: Vec<DepartmentBreakdown> = rows
        .into_iter()
        .map(|row| DepartmentBreakdown {
            id: row.id,
            name: row.name,
            description: row.description,
            product_count: row.product_count,
            average_price: decimal_to_f64(row.average_price),
            average_rating: row.average_rating.map(round2).unwrap_or(0.0),
        })
        .collect();

    breakdown.sort_by(|a, b| b.product_count.cmp(&a.product_count).then(a.id.cmp(&b.id)));

    let total_departments = breakdown.len() as u64;
    let departments_with_products = breakdown.iter().filter(|d| d.product_count > 0).count() as u64;
    let total_products: u64 = breakdown.iter().map(|d| d.product_count).sum();
    let average_products_per_department = if total_departments > 0 {
        round2(total_products as f64 / total_departments as f64)
    } else {
        0.0
    };

    DepartmentStats {
        total_departments,
        departments_with_products,
        departments_without_products: total_departments - departments_with_products,
        total_products_across_departments: total_products,
        average_products_per_department,
        department_breakdown: breakdown,
    }
}

/// Non-empty buckets only, in bucket order.
pub fn price_distribution(counts: &[(PriceBucket, u64)]) -> Vec<PriceBucketCount> {
    PriceBucket::ALL
        .iter()
        .filter_map(|bucket| {
            let count: u64 = counts
                .iter()
                .filter(|(b, _)| b == bucket)
                .map(|(_, count)| count)
                .sum();
            (count > 0).then(|| PriceBucketCount {
                range: bucket.label().to_string(),
                count,
            })
        })
        .collect()
}

fn decimal_to_f64(value: Option<Decimal>) -> f64 {
    value
        .map(|v| v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|v| v.to_f64())
        .unwrap_or(0.0)
}
