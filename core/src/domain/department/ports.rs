use std::{collections::HashMap, future::Future};

use crate::domain::{
    common::{entities::app_errors::CoreError, pagination::Page},
    department::{
        entities::{Department, DepartmentView, NewDepartment},
        value_objects::{
            CreateDepartmentInput, DeleteDepartmentInput, DepartmentProducts,
            GetDepartmentInput, GetDepartmentProductsInput, GetDepartmentsFilter,
            UpdateDepartmentInput,
        },
    },
    stats::value_objects::DepartmentAggregate,
};

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentRepository: Send + Sync {
    /// Departments ordered by name, narrowed by an optional name substring.
    fn list(
        &self,
        filter: GetDepartmentsFilter,
    ) -> impl Future<Output = Result<Page<Department>, CoreError>> + Send;

    fn count_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Every department with its product count and averages, largest
    /// product count first, then by id.
    fn department_breakdown(
        &self,
    ) -> impl Future<Output = Result<Vec<DepartmentAggregate>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Department>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Department>, CoreError>> + Send;

    fn create(
        &self,
        department: NewDepartment,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    fn update(
        &self,
        department: Department,
    ) -> impl Future<Output = Result<Department, CoreError>> + Send;

    /// Removes the department. When `detach_products` is set, owned products
    /// lose their department reference in the same transaction.
    fn delete(
        &self,
        id: i32,
        detach_products: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Number of products per department. Departments without products are
    /// absent from the map.
    fn product_counts(
        &self,
        ids: Vec<i32>,
    ) -> impl Future<Output = Result<HashMap<i32, u64>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DepartmentService: Send + Sync {
    fn get_departments(
        &self,
        filter: GetDepartmentsFilter,
    ) -> impl Future<Output = Result<Page<DepartmentView>, CoreError>> + Send;

    fn get_department(
        &self,
        input: GetDepartmentInput,
    ) -> impl Future<Output = Result<DepartmentView, CoreError>> + Send;

    fn get_department_products(
        &self,
        input: GetDepartmentProductsInput,
    ) -> impl Future<Output = Result<DepartmentProducts, CoreError>> + Send;

    fn create_department(
        &self,
        input: CreateDepartmentInput,
    ) -> impl Future<Output = Result<DepartmentView, CoreError>> + Send;

    fn update_department(
        &self,
        input: UpdateDepartmentInput,
    ) -> impl Future<Output = Result<DepartmentView, CoreError>> + Send;

    fn delete_department(
        &self,
        input: DeleteDepartmentInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
