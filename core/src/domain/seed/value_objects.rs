use serde::{Deserialize, Serialize};

/// One raw row of the product CSV. Every column is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeedRecord {
    pub uniq_id: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub sale_price: Option<String>,
    pub market_price: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
    /// Zero-based data row position in the source file, counting rows that
    /// failed to decode.
    #[serde(skip)]
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct LoadCatalogInput {
    pub records: Vec<SeedRecord>,
    pub batch_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    pub rows_read: u64,
    pub departments_created: u64,
    pub products_inserted: u64,
    /// Rows whose `product_id` was already present.
    pub products_skipped: u64,
    pub batches: u64,
}
