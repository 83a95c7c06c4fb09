use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, Statement,
    sea_query::{Expr, OnConflict, extension::postgres::PgExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, pagination::Page},
        product::{
            entities::{NewProduct, Product, ProductWithDepartment},
            ports::ProductRepository,
            value_objects::{DistinctField, ProductQuery},
        },
        stats::value_objects::{NamedCount, PriceBucket, ProductAggregates, TOP_LIMIT},
    },
    entity::{
        departments,
        products::{ActiveModel, Column, Entity},
    },
    infrastructure::product::{
        conditions::{apply_sort, product_condition},
        mappers::{
            bucket_count_from_row, map_with_department, named_count_from_row, to_active_model,
            totals_from_row,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Most frequent values of a text column, ties broken by the value's
    /// first appearance.
    async fn top_values(
        &self,
        field: DistinctField,
        department_id: Option<i32>,
    ) -> Result<Vec<NamedCount>, CoreError> {
        let column = distinct_column_name(field);
        let stmt = stats_statement(
            format!(
                r#"
                SELECT {column} AS name, COUNT(*) AS count
                FROM products
                WHERE {column} IS NOT NULL AND {STATS_SCOPE}
                GROUP BY {column}
                ORDER BY COUNT(*) DESC, MIN(id) ASC
                LIMIT {TOP_LIMIT}
                "#
            ),
            department_id,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate top {} values: {}", column, e);
            CoreError::InternalServerError
        })?;

        Ok(rows.iter().filter_map(named_count_from_row).collect())
    }
}

fn distinct_column(field: DistinctField) -> Column {
    match field {
        DistinctField::Category => Column::Category,
        DistinctField::Brand => Column::Brand,
    }
}

fn distinct_column_name(field: DistinctField) -> &'static str {
    match field {
        DistinctField::Category => "category",
        DistinctField::Brand => "brand",
    }
}

/// Restricts a stats query to one department when `$1` is not null.
const STATS_SCOPE: &str = "($1::integer IS NULL OR department_id = $1)";

/// `CASE` expression mapping `sale_price` to its position in
/// [`PriceBucket::ALL`].
fn price_bucket_case() -> String {
    let arms: String = PriceBucket::ALL
        .iter()
        .enumerate()
        .filter_map(|(position, bucket)| {
            bucket
                .upper_bound()
                .map(|bound| format!("WHEN sale_price < {bound} THEN {position} "))
        })
        .collect();

    format!("CASE {arms}ELSE {} END", PriceBucket::ALL.len() - 1)
}

fn stats_statement(sql: String, department_id: Option<i32>) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [department_id.into()])
}

fn map_write_error(product_id: &str, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::Conflict(format!("Product with ID {product_id} already exists"));
    }
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = e.sql_err() {
        return CoreError::InvalidReference("Department not found".to_string());
    }
    error!("Failed to write product: {}", e);
    CoreError::InternalServerError
}

impl ProductRepository for PostgresProductRepository {
    async fn find_page(&self, query: ProductQuery) -> Result<Page<ProductWithDepartment>, CoreError> {
        let select = Entity::find().filter(product_condition(&query.criteria));

        let total = select.clone().count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count products: {}", e);
            CoreError::InternalServerError
        })?;

        if query.page.is_past_end(total) {
            return Ok(Page::new(Vec::new(), total, query.page));
        }

        let rows = apply_sort(select, query.sort)
            .find_also_related(departments::Entity)
            .offset(query.page.offset())
            .limit(query.page.limit())
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Page::new(
            rows.into_iter().map(map_with_department).collect(),
            total,
            query.page,
        ))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<ProductWithDepartment>, CoreError> {
        let row = Entity::find_by_id(id)
            .find_also_related(departments::Entity)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(row.map(map_with_department))
    }

    async fn get_by_product_id(&self, product_id: String) -> Result<Option<Product>, CoreError> {
        let product = Entity::find()
            .filter(Column::ProductId.eq(product_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get product by business key: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(product.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let product_id = product.product_id.clone();

        let created = Entity::insert(to_active_model(product))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| map_write_error(&product_id, e))?;

        Ok(Product::from(created))
    }

    async fn update(&self, product: Product) -> Result<Product, CoreError> {
        let active_model = ActiveModel {
            id: Set(product.id),
            product_id: Set(product.product_id.clone()),
            product_name: Set(product.product_name),
            category: Set(product.category),
            sub_category: Set(product.sub_category),
            brand: Set(product.brand),
            product_type: Set(product.r#type),
            sale_price: Set(product.sale_price),
            market_price: Set(product.market_price),
            rating: Set(product.rating),
            description: Set(product.description),
            department_id: Set(product.department_id),
            created_at: Set(product.created_at.fixed_offset()),
            updated_at: Set(product.updated_at.fixed_offset()),
        };

        let updated = Entity::update(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::product_not_found(),
                e => map_write_error(&product.product_id, e),
            })?;

        Ok(Product::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<u64, CoreError> {
        let result = Entity::delete_by_id(id).exec(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to delete product: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected)
    }

    async fn distinct_values(&self, field: DistinctField) -> Result<Vec<String>, CoreError> {
        let column = distinct_column(field);

        Entity::find()
            .select_only()
            .column(column)
            .distinct()
            .filter(column.is_not_null())
            .filter(column.ne(""))
            .order_by_asc(column)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list distinct {:?} values: {}", field, e);
                CoreError::InternalServerError
            })
    }

    async fn distinct_matching(
        &self,
        field: DistinctField,
        term: String,
        limit: u64,
    ) -> Result<Vec<String>, CoreError> {
        let column = distinct_column(field);

        Entity::find()
            .select_only()
            .column(column)
            .distinct()
            .filter(Expr::col((Entity, column)).ilike(format!("%{term}%")))
            .order_by_asc(column)
            .limit(limit)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to search {:?} values: {}", field, e);
                CoreError::InternalServerError
            })
    }

    async fn aggregate_stats(&self, department_id: Option<i32>) -> Result<ProductAggregates, CoreError> {
        let totals_stmt = stats_statement(
            format!(
                r#"
                SELECT
                  COUNT(*) AS total_products,
                  COUNT(sale_price) AS products_with_prices,
                  COUNT(rating) AS products_with_ratings,
                  COUNT(department_id) AS products_with_departments,
                  COUNT(*) FILTER (WHERE market_price > sale_price) AS products_on_sale,
                  ROUND(AVG(sale_price), 2) AS average_price,
                  MIN(sale_price) AS min_price,
                  MAX(sale_price) AS max_price,
                  AVG(rating) AS average_rating,
                  MIN(rating) AS min_rating,
                  MAX(rating) AS max_rating
                FROM products
                WHERE {STATS_SCOPE}
                "#
            ),
            department_id,
        );

        let totals = self
            .db
            .query_one(totals_stmt)
            .await
            .map_err(|e| {
                error!("Failed to aggregate product totals: {}", e);
                CoreError::InternalServerError
            })?
            .map(|row| totals_from_row(&row))
            .unwrap_or_default();

        let top_categories = self.top_values(DistinctField::Category, department_id).await?;
        let top_brands = self.top_values(DistinctField::Brand, department_id).await?;

        let buckets_stmt = stats_statement(
            format!(
                r#"
                SELECT {} AS bucket, COUNT(*) AS count
                FROM products
                WHERE sale_price IS NOT NULL AND {STATS_SCOPE}
                GROUP BY bucket
                ORDER BY bucket
                "#,
                price_bucket_case()
            ),
            department_id,
        );

        let price_buckets = self
            .db
            .query_all(buckets_stmt)
            .await
            .map_err(|e| {
                error!("Failed to aggregate price distribution: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .filter_map(bucket_count_from_row)
            .collect();

        Ok(ProductAggregates {
            totals,
            top_categories,
            top_brands,
            price_buckets,
        })
    }

    async fn insert_batch(&self, products: Vec<NewProduct>) -> Result<u64, CoreError> {
        if products.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(products.into_iter().map(to_active_model))
            .on_conflict(OnConflict::column(Column::ProductId).do_nothing().to_owned())
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to insert product batch: {}", e);
                CoreError::InternalServerError
            })
    }
}
