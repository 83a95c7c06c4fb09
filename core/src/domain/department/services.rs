use std::collections::HashMap;

use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        pagination::Page,
        services::Service,
    },
    department::{
        entities::{Department, DepartmentSummary, DepartmentView, NewDepartment},
        ports::{DepartmentRepository, DepartmentService},
        value_objects::{
            CreateDepartmentInput, DeleteDepartmentInput, DepartmentProducts,
            GetDepartmentInput, GetDepartmentProductsInput, GetDepartmentsFilter,
            UpdateDepartmentInput,
        },
    },
    health::ports::HealthCheckRepository,
    product::{
        entities::ProductView,
        ports::ProductRepository,
        value_objects::ProductQuery,
    },
};

impl<D, P, HC> Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    async fn load_department(&self, id: i32) -> Result<Department, CoreError> {
        self.department_repository
            .get_by_id(id)
            .await?
            .ok_or_else(CoreError::department_not_found)
    }

    async fn product_count(&self, id: i32) -> Result<u64, CoreError> {
        let counts = self.department_repository.product_counts(vec![id]).await?;
        Ok(counts.get(&id).copied().unwrap_or(0))
    }

    /// Rejects `name` when another department (not `except`) already uses it.
    async fn ensure_name_available(&self, name: &str, except: Option<i32>) -> Result<(), CoreError> {
        match self.department_repository.get_by_name(name.to_string()).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(CoreError::duplicate_department_name())
            }
            _ => Ok(()),
        }
    }
}

impl<D, P, HC> DepartmentService for Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_departments(
        &self,
        filter: GetDepartmentsFilter,
    ) -> Result<Page<DepartmentView>, CoreError> {
        let page = self.department_repository.list(filter).await?;

        let ids = page.items.iter().map(|d| d.id).collect();
        let counts: HashMap<i32, u64> = self.department_repository.product_counts(ids).await?;

        Ok(page.map(|department| {
            let count = counts.get(&department.id).copied().unwrap_or(0);
            DepartmentView::new(&department, count)
        }))
    }

    #[instrument(skip(self))]
    async fn get_department(&self, input: GetDepartmentInput) -> Result<DepartmentView, CoreError> {
        let department = self.load_department(input.id).await?;
        let count = self.product_count(department.id).await?;

        Ok(DepartmentView::new(&department, count))
    }

    #[instrument(skip(self))]
    async fn get_department_products(
        &self,
        input: GetDepartmentProductsInput,
    ) -> Result<DepartmentProducts, CoreError> {
        let department = self.load_department(input.id).await?;

        let mut query = ProductQuery {
            page: input.page,
            ..Default::default()
        };
        query.criteria.department_id = Some(department.id);

        let products = self.product_repository.find_page(query).await?;

        Ok(DepartmentProducts {
            department: DepartmentSummary::from(&department),
            products: products.map(ProductView::from),
        })
    }

    #[instrument(skip(self))]
    async fn create_department(
        &self,
        input: CreateDepartmentInput,
    ) -> Result<DepartmentView, CoreError> {
        self.ensure_name_available(&input.name, None).await?;

        let department = self
            .department_repository
            .create(NewDepartment {
                name: input.name,
                description: input.description,
            })
            .await?;
        info!(id = department.id, name = %department.name, "department created");

        Ok(DepartmentView::new(&department, 0))
    }

    #[instrument(skip(self))]
    async fn update_department(
        &self,
        input: UpdateDepartmentInput,
    ) -> Result<DepartmentView, CoreError> {
        let mut department = self.load_department(input.id).await?;

        if let Some(name) = input.name.as_deref().filter(|name| *name != department.name) {
            self.ensure_name_available(name, Some(department.id)).await?;
        }

        department.update(input.name, input.description);
        let department = self.department_repository.update(department).await?;
        let count = self.product_count(department.id).await?;

        Ok(DepartmentView::new(&department, count))
    }

    #[instrument(skip(self))]
    async fn delete_department(&self, input: DeleteDepartmentInput) -> Result<(), CoreError> {
        let department = self.load_department(input.id).await?;
        let count = self.product_count(department.id).await?;

        if count > 0 && !input.force {
            return Err(CoreError::DependentRecords { count });
        }
        if count > 0 {
            warn!(id = department.id, count, "detaching products from deleted department");
        }

        self.department_repository
            .delete(department.id, count > 0)
            .await?;
        info!(id = department.id, "department deleted");

        Ok(())
    }
}
