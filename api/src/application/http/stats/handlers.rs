pub mod get_department_stats;
pub mod get_product_stats;
