use crate::domain::{
    common::pagination::{Page, PageRequest},
    department::entities::DepartmentSummary,
    product::{criteria::clean_search_term, entities::ProductView},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDepartmentsFilter {
    /// Case-insensitive substring of the department name.
    pub search: Option<String>,
    pub page: PageRequest,
}

impl GetDepartmentsFilter {
    pub fn new(search: Option<&str>, page: PageRequest) -> Self {
        Self {
            search: search.and_then(clean_search_term),
            page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetDepartmentInput {
    pub id: i32,
}

#[derive(Debug, Clone)]
pub struct GetDepartmentProductsInput {
    pub id: i32,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateDepartmentInput {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct DeleteDepartmentInput {
    pub id: i32,
    /// Detach owned products instead of refusing the delete.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentProducts {
    pub department: DepartmentSummary,
    pub products: Page<ProductView>,
}
