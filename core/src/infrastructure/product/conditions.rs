//! Translates [`ProductCriteria`] and [`SortSpec`] into sea-orm query parts.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, Order, QueryOrder, Select,
    sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr},
};

use crate::{
    domain::product::{
        criteria::ProductCriteria,
        sorting::{SortDirection, SortKey, SortSpec},
    },
    entity::products::{Column, Entity},
};

fn contains(column: Column, term: &str) -> SimpleExpr {
    Expr::col((Entity, column)).ilike(format!("%{term}%"))
}

/// AND of every supplied criterion; `search` is an OR across the text columns.
pub fn product_condition(criteria: &ProductCriteria) -> Condition {
    let mut condition = Condition::all();

    if let Some(search) = criteria.search.as_deref() {
        condition = condition.add(
            Condition::any()
                .add(contains(Column::ProductName, search))
                .add(contains(Column::Brand, search))
                .add(contains(Column::Category, search))
                .add(contains(Column::SubCategory, search))
                .add(contains(Column::Description, search)),
        );
    }

    let text_filters = [
        (Column::Category, criteria.category.as_deref()),
        (Column::SubCategory, criteria.sub_category.as_deref()),
        (Column::Brand, criteria.brand.as_deref()),
        (Column::ProductType, criteria.r#type.as_deref()),
    ];
    for (column, value) in text_filters {
        if let Some(value) = value {
            condition = condition.add(contains(column, value));
        }
    }

    if let Some(department_id) = criteria.department_id {
        condition = condition.add(Column::DepartmentId.eq(department_id));
    }
    if let Some(min_price) = criteria.min_price {
        condition = condition.add(Column::SalePrice.gte(min_price));
    }
    if let Some(max_price) = criteria.max_price {
        condition = condition.add(Column::SalePrice.lte(max_price));
    }
    if let Some(min_rating) = criteria.min_rating {
        condition = condition.add(Column::Rating.gte(min_rating));
    }
    if criteria.in_stock {
        condition = condition.add(Column::SalePrice.gt(Decimal::ZERO));
    }
    if criteria.on_sale {
        condition = condition
            .add(Column::MarketPrice.is_not_null())
            .add(Column::SalePrice.is_not_null())
            .add(Expr::col((Entity, Column::MarketPrice)).gt(Expr::col((Entity, Column::SalePrice))));
    }

    condition
}

pub fn sort_column(key: SortKey) -> Column {
    match key {
        SortKey::ProductName => Column::ProductName,
        SortKey::SalePrice => Column::SalePrice,
        SortKey::MarketPrice => Column::MarketPrice,
        SortKey::Rating => Column::Rating,
        SortKey::Category => Column::Category,
        SortKey::Brand => Column::Brand,
        SortKey::CreatedAt => Column::CreatedAt,
        SortKey::UpdatedAt => Column::UpdatedAt,
        SortKey::Id => Column::Id,
    }
}

/// Orders by the resolved key, then by `id` in the same direction.
pub fn apply_sort(select: Select<Entity>, sort: SortSpec) -> Select<Entity> {
    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    let select = select.order_by(sort_column(sort.key), order.clone());
    if sort.key == SortKey::Id {
        select
    } else {
        select.order_by(Column::Id, order)
    }
}
