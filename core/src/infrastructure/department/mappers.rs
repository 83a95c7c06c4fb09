use rust_decimal::Decimal;
use sea_orm::QueryResult;

use crate::{
    domain::{department::entities::Department, stats::value_objects::DepartmentAggregate},
    entity::departments,
    infrastructure::product::mappers::count_column,
};

impl From<&departments::Model> for Department {
    fn from(model: &departments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Self::from(&model)
    }
}

pub fn department_aggregate_from_row(row: &QueryResult) -> Option<DepartmentAggregate> {
    Some(DepartmentAggregate {
        id: row.try_get("", "id").ok()?,
        name: row.try_get("", "name").ok()?,
        description: row.try_get::<Option<String>>("", "description").ok().flatten(),
        product_count: count_column(row, "product_count"),
        average_price: row.try_get::<Option<Decimal>>("", "average_price").ok().flatten(),
        average_rating: row.try_get::<Option<f64>>("", "average_rating").ok().flatten(),
    })
}
