use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ProductName,
    SalePrice,
    MarketPrice,
    Rating,
    Category,
    Brand,
    CreatedAt,
    UpdatedAt,
    Id,
}

impl SortKey {
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "name" | "product_name" => Some(SortKey::ProductName),
            "price" | "sale_price" => Some(SortKey::SalePrice),
            "market_price" => Some(SortKey::MarketPrice),
            "rating" => Some(SortKey::Rating),
            "category" => Some(SortKey::Category),
            "brand" => Some(SortKey::Brand),
            "created_at" => Some(SortKey::CreatedAt),
            "updated_at" => Some(SortKey::UpdatedAt),
            "id" => Some(SortKey::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than `asc`/`desc` (any case) resolves to `Desc`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(|t| t.trim().to_lowercase()).as_deref() {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// Unknown keys fall back to `created_at`; the direction is kept.
    pub fn resolve(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let direction = SortDirection::from_token(sort_order);

        let key = match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
            None => SortKey::CreatedAt,
            Some(alias) => SortKey::from_alias(alias).unwrap_or_else(|| {
                warn!(sort_by = alias, "invalid sort field, using created_at");
                SortKey::CreatedAt
            }),
        };

        Self { key, direction }
    }
}
