use tracing::error;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    department::ports::DepartmentRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    product::ports::ProductRepository,
};

impl<D, P, HC> HealthCheckService for Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository
            .health()
            .await
            .map(DatabaseHealthStatus::connected)
            .map_err(|e| {
                error!("Health check failed: {}", e);
                CoreError::ServiceUnavailable
            })
    }
}
