use crate::domain::{
    department::ports::DepartmentRepository, health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
};

#[derive(Clone)]
pub struct Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    pub(crate) department_repository: D,
    pub(crate) product_repository: P,
    pub(crate) health_check_repository: HC,
}

impl<D, P, HC> Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    pub fn new(department_repository: D, product_repository: P, health_check_repository: HC) -> Self {
        Self {
            department_repository,
            product_repository,
            health_check_repository,
        }
    }
}
