use std::collections::HashMap;

use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    department::{entities::NewDepartment, ports::DepartmentRepository},
    health::ports::HealthCheckRepository,
    product::{entities::NewProduct, ports::ProductRepository},
    seed::{
        ports::SeedService,
        transform::clean_record,
        value_objects::{LoadCatalogInput, LoadReport},
    },
};

impl<D, P, HC> Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    /// Maps each distinct category to a department id, creating the missing
    /// departments. Returns the mapping and how many were created.
    async fn ensure_category_departments(
        &self,
        products: &[NewProduct],
    ) -> Result<(HashMap<String, i32>, u64), CoreError> {
        let mut mapping: HashMap<String, i32> = HashMap::new();
        let mut created = 0;

        for category in products.iter().filter_map(|p| p.category.as_deref()) {
            if mapping.contains_key(category) {
                continue;
            }

            let department = match self
                .department_repository
                .get_by_name(category.to_string())
                .await?
            {
                Some(existing) => existing,
                None => {
                    created += 1;
                    self.department_repository
                        .create(NewDepartment {
                            name: category.to_string(),
                            description: Some(format!("Department for {category} products")),
                        })
                        .await?
                }
            };

            mapping.insert(category.to_string(), department.id);
        }

        Ok((mapping, created))
    }
}

impl<D, P, HC> SeedService for Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(rows = input.records.len(), batch_size = input.batch_size))]
    async fn load_catalog(&self, input: LoadCatalogInput) -> Result<LoadReport, CoreError> {
        let batch_size = input.batch_size.max(1);

        let mut products: Vec<NewProduct> = input
            .records
            .into_iter()
            .map(clean_record)
            .collect();

        let (mapping, departments_created) = self.ensure_category_departments(&products).await?;
        info!(
            departments = mapping.len(),
            created = departments_created,
            "category departments ready"
        );

        for product in products.iter_mut() {
            product.department_id = product
                .category
                .as_ref()
                .and_then(|category| mapping.get(category).copied());
        }

        let mut report = LoadReport {
            rows_read: products.len() as u64,
            departments_created,
            ..Default::default()
        };
        let total_batches = products.len().div_ceil(batch_size);

        for chunk in products.chunks(batch_size) {
            let inserted = self.product_repository.insert_batch(chunk.to_vec()).await?;

            report.batches += 1;
            report.products_inserted += inserted;
            report.products_skipped += (chunk.len() as u64).saturating_sub(inserted);
            info!(
                "Inserted batch {}/{} ({} new rows)",
                report.batches, total_batches, inserted
            );
        }

        info!(?report, "catalog loaded");
        Ok(report)
    }
}
