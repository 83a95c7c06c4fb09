use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{DepartmentStats, GetProductStatsInput, ProductStats},
};

/// Statistics degrade to zeroed snapshots when the facts cannot be loaded;
/// only a scope naming an unknown department is reported as an error.
#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn get_product_stats(
        &self,
        input: GetProductStatsInput,
    ) -> impl Future<Output = Result<ProductStats, CoreError>> + Send;

    fn get_department_stats(&self) -> impl Future<Output = DepartmentStats> + Send;
}
