use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    department::ports::DepartmentRepository,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    stats::{
        aggregator::{summarize_departments, summarize_products},
        ports::StatsService,
        value_objects::{DepartmentStats, GetProductStatsInput, ProductStats},
    },
};

impl<D, P, HC> Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    async fn collect_product_stats(&self, department_id: Option<i32>) -> Result<ProductStats, CoreError> {
        let aggregates = self.product_repository.aggregate_stats(department_id).await?;
        let total_departments = match department_id {
            Some(_) => 1,
            None => self.department_repository.count_all().await?,
        };

        Ok(summarize_products(aggregates, total_departments))
    }

    async fn collect_department_stats(&self) -> Result<DepartmentStats, CoreError> {
        let rows = self.department_repository.department_breakdown().await?;

        Ok(summarize_departments(rows))
    }
}

impl<D, P, HC> StatsService for Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_product_stats(&self, input: GetProductStatsInput) -> Result<ProductStats, CoreError> {
        match self.ensure_department_exists(input.department_id).await {
            Ok(()) => {}
            Err(e @ (CoreError::NotFound(_) | CoreError::InvalidReference(_))) => return Err(e),
            Err(e) => {
                error!("Error resolving stats department: {}", e);
                return Ok(ProductStats::default());
            }
        }

        match self.collect_product_stats(input.department_id).await {
            Ok(stats) => Ok(stats),
            Err(e) => {
                error!("Error calculating product stats: {}", e);
                Ok(ProductStats::default())
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_department_stats(&self) -> DepartmentStats {
        self.collect_department_stats().await.unwrap_or_else(|e| {
            error!("Error calculating department stats: {}", e);
            DepartmentStats::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::domain::{
        department::{entities::fixtures::department, ports::MockDepartmentRepository},
        health::ports::MockHealthCheckRepository,
        product::ports::MockProductRepository,
        stats::value_objects::{DepartmentAggregate, ProductAggregates, ProductTotals},
    };

    use super::*;

    fn service(
        departments: MockDepartmentRepository,
        products: MockProductRepository,
    ) -> Service<MockDepartmentRepository, MockProductRepository, MockHealthCheckRepository> {
        Service::new(departments, products, MockHealthCheckRepository::new())
    }

    fn priced(total_products: u64, average_price: rust_decimal::Decimal) -> ProductAggregates {
        ProductAggregates {
            totals: ProductTotals {
                total_products,
                products_with_prices: total_products,
                products_with_departments: total_products,
                average_price: Some(average_price),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_global_product_stats() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_count_all()
            .returning(|| Box::pin(async { Ok(2) }));
        let mut products = MockProductRepository::new();
        products
            .expect_aggregate_stats()
            .withf(|scope| scope.is_none())
            .returning(|_| Box::pin(async { Ok(priced(2, dec!(30))) }));

        let stats = service(departments, products)
            .get_product_stats(GetProductStatsInput::default())
            .await
            .unwrap();

        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_departments, 2);
        assert_eq!(stats.average_price, 30.0);
    }

    #[tokio::test]
    async fn test_scoped_product_stats() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(department(id, "A"))) }));
        departments.expect_count_all().never();
        let mut products = MockProductRepository::new();
        products
            .expect_aggregate_stats()
            .withf(|scope| *scope == Some(1))
            .returning(|_| Box::pin(async { Ok(priced(1, dec!(20))) }));

        let stats = service(departments, products)
            .get_product_stats(GetProductStatsInput {
                department_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.total_departments, 1);
        assert_eq!(stats.products_with_departments, 1);
    }

    #[tokio::test]
    async fn test_scoped_stats_for_unknown_department() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(departments, MockProductRepository::new())
            .get_product_stats(GetProductStatsInput {
                department_id: Some(12),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::unknown_department(12));
    }

    #[tokio::test]
    async fn test_scoped_stats_degrade_when_department_lookup_fails() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        let mut products = MockProductRepository::new();
        products.expect_aggregate_stats().never();

        let stats = service(departments, products)
            .get_product_stats(GetProductStatsInput {
                department_id: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(stats, ProductStats::default());
    }

    #[tokio::test]
    async fn test_product_stats_degrade_on_store_failure() {
        let mut products = MockProductRepository::new();
        products
            .expect_aggregate_stats()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let stats = service(MockDepartmentRepository::new(), products)
            .get_product_stats(GetProductStatsInput::default())
            .await
            .unwrap();

        assert_eq!(stats, ProductStats::default());
    }

    #[tokio::test]
    async fn test_department_stats_degrade_on_store_failure() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_department_breakdown()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));

        let stats = service(departments, MockProductRepository::new())
            .get_department_stats()
            .await;

        assert_eq!(stats, DepartmentStats::default());
    }

    #[tokio::test]
    async fn test_department_stats() {
        let mut departments = MockDepartmentRepository::new();
        departments.expect_department_breakdown().returning(|| {
            Box::pin(async {
                Ok(vec![
                    DepartmentAggregate {
                        id: 2,
                        name: "B".to_string(),
                        description: None,
                        product_count: 2,
                        average_price: Some(dec!(15)),
                        average_rating: None,
                    },
                    DepartmentAggregate {
                        id: 1,
                        name: "A".to_string(),
                        description: None,
                        product_count: 0,
                        average_price: None,
                        average_rating: None,
                    },
                ])
            })
        });

        let stats = service(departments, MockProductRepository::new())
            .get_department_stats()
            .await;

        assert_eq!(stats.total_departments, 2);
        assert_eq!(stats.departments_with_products, 1);
        assert_eq!(stats.department_breakdown[0].id, 2);
        assert_eq!(stats.department_breakdown[0].average_price, 15.0);
    }
}
