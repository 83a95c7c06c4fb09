use std::collections::HashMap;

use crate::domain::{
    common::pagination::PageRequest,
    product::{
        criteria::ProductCriteria,
        entities::{NewProduct, ProductPatch},
        sorting::SortSpec,
    },
};

/// Filter, ordering and page for a product listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub criteria: ProductCriteria,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl ProductQuery {
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let get = |key: &str| query_map.get(key).map(String::as_str);

        Self {
            criteria: ProductCriteria::from_query_map(query_map),
            sort: SortSpec::resolve(get("sort_by"), get("sort_order")),
            page: PageRequest::from_raw(get("page"), get("per_page")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetProductInput {
    pub id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub product: NewProduct,
}

#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub id: i32,
    pub patch: ProductPatch,
}

#[derive(Debug, Clone)]
pub struct DeleteProductInput {
    pub id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    Category,
    Brand,
}
