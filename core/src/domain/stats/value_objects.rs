use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of entries in the top category and top brand lists.
pub const TOP_LIMIT: u64 = 10;

/// Sale price histogram buckets, lower bound inclusive, upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    Under25,
    From25To50,
    From50To100,
    From100To250,
    From250To500,
    From500,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 6] = [
        PriceBucket::Under25,
        PriceBucket::From25To50,
        PriceBucket::From50To100,
        PriceBucket::From100To250,
        PriceBucket::From250To500,
        PriceBucket::From500,
    ];

    /// Exclusive upper bound, `None` for the open-ended top bucket.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            PriceBucket::Under25 => Some(25),
            PriceBucket::From25To50 => Some(50),
            PriceBucket::From50To100 => Some(100),
            PriceBucket::From100To250 => Some(250),
            PriceBucket::From250To500 => Some(500),
            PriceBucket::From500 => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::Under25 => "Under $25",
            PriceBucket::From25To50 => "$25-$50",
            PriceBucket::From50To100 => "$50-$100",
            PriceBucket::From100To250 => "$100-$250",
            PriceBucket::From250To500 => "$250-$500",
            PriceBucket::From500 => "$500+",
        }
    }
}

/// Scalar aggregates over one product scope, as computed by the store.
/// Averages and extremes are `None` when no product has the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductTotals {
    pub total_products: u64,
    pub products_with_prices: u64,
    pub products_with_ratings: u64,
    pub products_with_departments: u64,
    pub products_on_sale: u64,
    pub average_price: Option<Decimal>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub average_rating: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductAggregates {
    pub totals: ProductTotals,
    /// At most [`TOP_LIMIT`] entries, largest count first. Equal counts keep
    /// the order in which the values first appear.
    pub top_categories: Vec<NamedCount>,
    pub top_brands: Vec<NamedCount>,
    /// Priced products per bucket. Empty buckets may be absent.
    pub price_buckets: Vec<(PriceBucket, u64)>,
}

/// One department with the aggregates of the products it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentAggregate {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub product_count: u64,
    pub average_price: Option<Decimal>,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceBucketCount {
    pub range: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductStats {
    pub total_products: u64,
    pub total_departments: u64,
    pub products_with_prices: u64,
    pub products_with_ratings: u64,
    pub products_with_departments: u64,
    pub products_on_sale: u64,
    pub average_price: f64,
    pub price_range: ValueRange,
    pub average_rating: f64,
    pub rating_range: ValueRange,
    pub rated_products: u64,
    pub top_categories: Vec<NamedCount>,
    pub top_brands: Vec<NamedCount>,
    pub price_distribution: Vec<PriceBucketCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentBreakdown {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub product_count: u64,
    pub average_price: f64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct DepartmentStats {
    pub total_departments: u64,
    pub departments_with_products: u64,
    pub departments_without_products: u64,
    pub total_products_across_departments: u64,
    pub average_products_per_department: f64,
    pub department_breakdown: Vec<DepartmentBreakdown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetProductStatsInput {
    /// Restricts every figure to one department's products.
    pub department_id: Option<i32>,
}
