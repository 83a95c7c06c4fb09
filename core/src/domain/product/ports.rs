use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, pagination::Page},
    product::{
        entities::{NewProduct, Product, ProductView, ProductWithDepartment},
        value_objects::{
            CreateProductInput, DeleteProductInput, DistinctField, GetProductInput, ProductQuery,
            UpdateProductInput,
        },
    },
    stats::value_objects::ProductAggregates,
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Counts the products matching the query criteria, then loads the
    /// requested page (with each product's department) in query order.
    fn find_page(
        &self,
        query: ProductQuery,
    ) -> impl Future<Output = Result<Page<ProductWithDepartment>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<ProductWithDepartment>, CoreError>> + Send;

    fn get_by_product_id(
        &self,
        product_id: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// Returns the number of deleted rows.
    fn delete(&self, id: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Distinct non-empty values of a text column, alphabetical.
    fn distinct_values(
        &self,
        field: DistinctField,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// Distinct values of a text column containing `term` (case-insensitive).
    fn distinct_matching(
        &self,
        field: DistinctField,
        term: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// Counts, averages, extremes, top lists and the price histogram over
    /// every product, or over one department's products.
    fn aggregate_stats(
        &self,
        department_id: Option<i32>,
    ) -> impl Future<Output = Result<ProductAggregates, CoreError>> + Send;

    /// Inserts in one statement, skipping rows whose `product_id` already
    /// exists. Returns the number of rows actually inserted.
    fn insert_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn get_products(
        &self,
        query: ProductQuery,
    ) -> impl Future<Output = Result<Page<ProductView>, CoreError>> + Send;

    fn get_product(
        &self,
        input: GetProductInput,
    ) -> impl Future<Output = Result<ProductView, CoreError>> + Send;

    fn create_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<ProductView, CoreError>> + Send;

    fn update_product(
        &self,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<ProductView, CoreError>> + Send;

    fn delete_product(
        &self,
        input: DeleteProductInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_distinct_values(
        &self,
        field: DistinctField,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_search_suggestions(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
