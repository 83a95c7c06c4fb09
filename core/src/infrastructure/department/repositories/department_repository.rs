use std::{collections::HashMap, sync::Arc};

use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    Statement, TransactionTrait,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp, pagination::Page},
        department::{
            entities::{Department, NewDepartment},
            ports::DepartmentRepository,
            value_objects::GetDepartmentsFilter,
        },
        stats::value_objects::DepartmentAggregate,
    },
    entity::{
        departments::{ActiveModel, Column, Entity},
        products,
    },
    infrastructure::department::mappers::department_aggregate_from_row,
};

#[derive(Debug, FromQueryResult)]
struct DepartmentProductCount {
    department_id: Option<i32>,
    count: i64,
}

#[derive(Debug, Clone)]
pub struct PostgresDepartmentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresDepartmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_write_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::duplicate_department_name();
    }
    error!("Failed to write department: {}", e);
    CoreError::InternalServerError
}

impl DepartmentRepository for PostgresDepartmentRepository {
    async fn list(&self, filter: GetDepartmentsFilter) -> Result<Page<Department>, CoreError> {
        let mut select = Entity::find();
        if let Some(search) = filter.search.as_deref() {
            select = select.filter(Expr::col((Entity, Column::Name)).ilike(format!("%{search}%")));
        }

        let total = select.clone().count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count departments: {}", e);
            CoreError::InternalServerError
        })?;

        if filter.page.is_past_end(total) {
            return Ok(Page::new(Vec::new(), total, filter.page));
        }

        let departments = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to list departments: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Page::new(
            departments.into_iter().map(Department::from).collect(),
            total,
            filter.page,
        ))
    }

    async fn count_all(&self) -> Result<u64, CoreError> {
        Entity::find().count(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to count departments: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn department_breakdown(&self) -> Result<Vec<DepartmentAggregate>, CoreError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              d.id,
              d.name,
              d.description,
              COUNT(p.id) AS product_count,
              ROUND(AVG(p.sale_price), 2) AS average_price,
              AVG(p.rating) AS average_rating
            FROM departments d
            LEFT JOIN products p ON p.department_id = d.id
            GROUP BY d.id, d.name, d.description
            ORDER BY product_count DESC, d.id ASC
            "#,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to aggregate department breakdown: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows.iter().filter_map(department_aggregate_from_row).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Department>, CoreError> {
        let department = Entity::find_by_id(id).one(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to get department: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(department.map(Department::from))
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Department>, CoreError> {
        let department = Entity::find()
            .filter(Column::Name.eq(name))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get department by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(department.map(Department::from))
    }

    async fn create(&self, department: NewDepartment) -> Result<Department, CoreError> {
        let now = generate_timestamp().fixed_offset();
        let active_model = ActiveModel {
            name: Set(department.name),
            description: Set(department.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(map_write_error)?;

        Ok(Department::from(created))
    }

    async fn update(&self, department: Department) -> Result<Department, CoreError> {
        let active_model = ActiveModel {
            id: Set(department.id),
            name: Set(department.name),
            description: Set(department.description),
            created_at: Set(department.created_at.fixed_offset()),
            updated_at: Set(department.updated_at.fixed_offset()),
        };

        let updated = Entity::update(active_model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::department_not_found(),
                e => map_write_error(e),
            })?;

        Ok(Department::from(updated))
    }

    async fn delete(&self, id: i32, detach_products: bool) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        if detach_products {
            products::Entity::update_many()
                .col_expr(products::Column::DepartmentId, Expr::value(Option::<i32>::None))
                .col_expr(
                    products::Column::UpdatedAt,
                    Expr::value(generate_timestamp().fixed_offset()),
                )
                .filter(products::Column::DepartmentId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to detach department products: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        let result = Entity::delete_by_id(id).exec(&txn).await.map_err(|e| {
            error!("Failed to delete department: {}", e);
            CoreError::InternalServerError
        })?;

        if result.rows_affected == 0 {
            return Err(CoreError::department_not_found());
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit department delete: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn product_counts(&self, ids: Vec<i32>) -> Result<HashMap<i32, u64>, CoreError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = products::Entity::find()
            .select_only()
            .column(products::Column::DepartmentId)
            .column_as(products::Column::Id.count(), "count")
            .filter(products::Column::DepartmentId.is_in(ids))
            .group_by(products::Column::DepartmentId)
            .into_model::<DepartmentProductCount>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to count department products: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                row.department_id
                    .map(|department_id| (department_id, row.count.max(0) as u64))
            })
            .collect())
    }
}
