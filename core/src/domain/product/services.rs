use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        pagination::Page,
        services::Service,
    },
    department::ports::DepartmentRepository,
    health::ports::HealthCheckRepository,
    product::{
        criteria::clean_search_term,
        entities::{ProductView, ProductWithDepartment},
        ports::{ProductRepository, ProductService},
        value_objects::{
            CreateProductInput, DeleteProductInput, DistinctField, GetProductInput, ProductQuery,
            UpdateProductInput,
        },
    },
};

const MIN_SUGGESTION_TERM: usize = 2;
const MAX_SUGGESTIONS: usize = 5;

impl<D, P, HC> Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    /// Fails with an invalid reference when `department_id` names no department.
    pub(crate) async fn ensure_department_exists(
        &self,
        department_id: Option<i32>,
    ) -> Result<(), CoreError> {
        let Some(department_id) = department_id else {
            return Ok(());
        };

        self.department_repository
            .get_by_id(department_id)
            .await?
            .map(|_| ())
            .ok_or(CoreError::unknown_department(department_id))
    }

    async fn load_product(&self, id: i32) -> Result<ProductWithDepartment, CoreError> {
        self.product_repository
            .get_by_id(id)
            .await?
            .ok_or_else(CoreError::product_not_found)
    }
}

impl<D, P, HC> ProductService for Service<D, P, HC>
where
    D: DepartmentRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_products(&self, query: ProductQuery) -> Result<Page<ProductView>, CoreError> {
        self.ensure_department_exists(query.criteria.department_id)
            .await?;

        let page = self.product_repository.find_page(query).await?;
        Ok(page.map(ProductView::from))
    }

    #[instrument(skip(self))]
    async fn get_product(&self, input: GetProductInput) -> Result<ProductView, CoreError> {
        self.load_product(input.id).await.map(ProductView::from)
    }

    #[instrument(skip(self), fields(product_id = %input.product.product_id))]
    async fn create_product(&self, input: CreateProductInput) -> Result<ProductView, CoreError> {
        let product_id = input.product.product_id.clone();

        if self
            .product_repository
            .get_by_product_id(product_id.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "Product with ID {product_id} already exists"
            )));
        }

        self.ensure_department_exists(input.product.department_id)
            .await?;

        let created = self.product_repository.create(input.product).await?;
        info!(id = created.id, "product created");

        self.load_product(created.id).await.map(ProductView::from)
    }

    #[instrument(skip(self))]
    async fn update_product(&self, input: UpdateProductInput) -> Result<ProductView, CoreError> {
        let ProductWithDepartment { mut product, .. } = self.load_product(input.id).await?;

        if let Some(department_id) = input.patch.department_id {
            self.ensure_department_exists(department_id).await?;
        }

        product.apply(input.patch);
        let updated = self.product_repository.update(product).await?;

        self.load_product(updated.id).await.map(ProductView::from)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, input: DeleteProductInput) -> Result<(), CoreError> {
        let deleted = self.product_repository.delete(input.id).await?;
        if deleted == 0 {
            return Err(CoreError::product_not_found());
        }

        info!(id = input.id, "product deleted");
        Ok(())
    }

    async fn get_distinct_values(&self, field: DistinctField) -> Result<Vec<String>, CoreError> {
        self.product_repository.distinct_values(field).await
    }

    #[instrument(skip(self))]
    async fn get_search_suggestions(&self, term: String) -> Result<Vec<String>, CoreError> {
        let Some(term) = clean_search_term(&term) else {
            return Ok(Vec::new());
        };
        if term.chars().count() < MIN_SUGGESTION_TERM {
            return Ok(Vec::new());
        }

        let mut suggestions = self
            .product_repository
            .distinct_matching(DistinctField::Category, term.clone(), MAX_SUGGESTIONS as u64)
            .await?;

        if suggestions.len() < MAX_SUGGESTIONS {
            let remaining = MAX_SUGGESTIONS - suggestions.len();
            let brands = self
                .product_repository
                .distinct_matching(DistinctField::Brand, term, remaining as u64)
                .await?;
            for brand in brands {
                if !suggestions.contains(&brand) {
                    suggestions.push(brand);
                }
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::domain::{
        common::pagination::PageRequest,
        department::{entities::fixtures::department, ports::MockDepartmentRepository},
        health::ports::MockHealthCheckRepository,
        product::{
            entities::{NewProduct, ProductPatch, fixtures::product},
            ports::MockProductRepository,
        },
    };

    use super::*;

    type TestService =
        Service<MockDepartmentRepository, MockProductRepository, MockHealthCheckRepository>;

    fn service(departments: MockDepartmentRepository, products: MockProductRepository) -> TestService {
        Service::new(departments, products, MockHealthCheckRepository::new())
    }

    fn with_department(p: crate::domain::product::entities::Product) -> ProductWithDepartment {
        ProductWithDepartment {
            product: p,
            department: None,
        }
    }

    #[tokio::test]
    async fn test_get_products_maps_views() {
        let departments = MockDepartmentRepository::new();
        let mut products = MockProductRepository::new();
        products.expect_find_page().returning(|query| {
            Box::pin(async move {
                let mut p = product(1, "SKU-1");
                p.market_price = Some(dec!(10));
                p.sale_price = Some(dec!(5));
                Ok(Page::new(vec![with_department(p)], 41, query.page))
            })
        });

        let query = ProductQuery {
            page: PageRequest::new(3, 20),
            ..Default::default()
        };
        let page = service(departments, products).get_products(query).await.unwrap();

        assert_eq!(page.total, 41);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert_eq!(page.items[0].discount_percentage, 50.0);
    }

    #[tokio::test]
    async fn test_get_products_rejects_unknown_department() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let mut products = MockProductRepository::new();
        products.expect_find_page().never();

        let mut query = ProductQuery::default();
        query.criteria.department_id = Some(99);

        let err = service(departments, products)
            .get_products(query)
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::unknown_department(99));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(MockDepartmentRepository::new(), products)
            .get_product(GetProductInput { id: 5 })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::product_not_found());
    }

    #[tokio::test]
    async fn test_create_product_rejects_duplicate_business_key() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_product_id()
            .returning(|id| Box::pin(async move { Ok(Some(product(1, &id))) }));
        products.expect_create().never();

        let input = CreateProductInput {
            product: NewProduct {
                product_id: "SKU-1".to_string(),
                product_name: "Lamp".to_string(),
                ..Default::default()
            },
        };
        let err = service(MockDepartmentRepository::new(), products)
            .create_product(input)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Conflict(message) if message.contains("already exists")));
    }

    #[tokio::test]
    async fn test_create_product_rejects_unknown_department() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_product_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        products.expect_create().never();

        let input = CreateProductInput {
            product: NewProduct {
                product_id: "SKU-2".to_string(),
                product_name: "Chair".to_string(),
                department_id: Some(7),
                ..Default::default()
            },
        };
        let err = service(departments, products)
            .create_product(input)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Department with ID 7 not found");
    }

    #[tokio::test]
    async fn test_create_product_returns_view_with_department() {
        let mut departments = MockDepartmentRepository::new();
        departments
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(department(id, "Home"))) }));
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_product_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        products.expect_create().returning(|new| {
            Box::pin(async move {
                let mut p = product(11, &new.product_id);
                p.department_id = new.department_id;
                Ok(p)
            })
        });
        products.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                let mut p = product(id, "SKU-3");
                p.department_id = Some(2);
                Ok(Some(ProductWithDepartment {
                    product: p,
                    department: Some(department(2, "Home")),
                }))
            })
        });

        let input = CreateProductInput {
            product: NewProduct {
                product_id: "SKU-3".to_string(),
                product_name: "Rug".to_string(),
                department_id: Some(2),
                ..Default::default()
            },
        };
        let view = service(departments, products)
            .create_product(input)
            .await
            .unwrap();

        assert_eq!(view.id, 11);
        assert_eq!(view.department_name.as_deref(), Some("Home"));
    }

    #[tokio::test]
    async fn test_update_product_applies_patch() {
        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .times(2)
            .returning(|id| Box::pin(async move { Ok(Some(with_department(product(id, "SKU-4")))) }));
        products
            .expect_update()
            .withf(|p| {
                p.product_name == "Renamed" && p.rating == Some(4.5) && p.product_id == "SKU-4"
            })
            .times(1)
            .returning(|p| Box::pin(async move { Ok(p) }));

        let input = UpdateProductInput {
            id: 4,
            patch: ProductPatch {
                product_name: Some("Renamed".to_string()),
                rating: Some(Some(4.5)),
                ..Default::default()
            },
        };
        let view = service(MockDepartmentRepository::new(), products)
            .update_product(input)
            .await
            .unwrap();

        assert_eq!(view.id, 4);
    }

    #[tokio::test]
    async fn test_update_product_clearing_department_skips_lookup() {
        let mut departments = MockDepartmentRepository::new();
        departments.expect_get_by_id().never();
        let mut products = MockProductRepository::new();
        products.expect_get_by_id().returning(|id| {
            Box::pin(async move {
                let mut p = product(id, "SKU-5");
                p.department_id = Some(3);
                Ok(Some(with_department(p)))
            })
        });
        products
            .expect_update()
            .withf(|p| p.department_id.is_none())
            .returning(|p| Box::pin(async move { Ok(p) }));

        let input = UpdateProductInput {
            id: 5,
            patch: ProductPatch {
                department_id: Some(None),
                ..Default::default()
            },
        };
        service(departments, products)
            .update_product(input)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut products = MockProductRepository::new();
        products
            .expect_delete()
            .returning(|_| Box::pin(async { Ok(0) }));

        let err = service(MockDepartmentRepository::new(), products)
            .delete_product(DeleteProductInput { id: 1 })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::product_not_found());
    }

    #[tokio::test]
    async fn test_suggestions_ignore_short_terms() {
        let mut products = MockProductRepository::new();
        products.expect_distinct_matching().never();

        let service = service(MockDepartmentRepository::new(), products);
        assert!(service.get_search_suggestions("a".to_string()).await.unwrap().is_empty());
        assert!(service.get_search_suggestions(" % ".to_string()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_list_categories_before_brands() {
        let mut products = MockProductRepository::new();
        products
            .expect_distinct_matching()
            .withf(|field, term, limit| {
                *field == DistinctField::Category && term == "lap" && *limit == 5
            })
            .returning(|_, _, _| {
                Box::pin(async { Ok(vec!["Laptops".to_string(), "Laptop Bags".to_string()]) })
            });
        products
            .expect_distinct_matching()
            .withf(|field, _, limit| *field == DistinctField::Brand && *limit == 3)
            .returning(|_, _, _| {
                Box::pin(async { Ok(vec!["Lapcare".to_string(), "Laptops".to_string()]) })
            });

        let suggestions = service(MockDepartmentRepository::new(), products)
            .get_search_suggestions("lap".to_string())
            .await
            .unwrap();

        assert_eq!(suggestions, vec!["Laptops", "Laptop Bags", "Lapcare"]);
    }
}
