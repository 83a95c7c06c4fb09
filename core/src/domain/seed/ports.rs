use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    seed::value_objects::{LoadCatalogInput, LoadReport},
};

#[cfg_attr(test, mockall::automock)]
pub trait SeedService: Send + Sync {
    /// Cleans the raw rows, ensures one department per category and inserts
    /// the products batch by batch. Earlier batches stay committed when a
    /// later one fails.
    fn load_catalog(
        &self,
        input: LoadCatalogInput,
    ) -> impl Future<Output = Result<LoadReport, CoreError>> + Send;
}
