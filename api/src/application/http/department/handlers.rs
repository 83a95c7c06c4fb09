pub mod create_department;
pub mod delete_department;
pub mod get_department;
pub mod get_department_products;
pub mod get_departments;
pub mod update_department;
