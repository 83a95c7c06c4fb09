pub mod create_product;
pub mod delete_product;
pub mod get_brands;
pub mod get_categories;
pub mod get_product;
pub mod get_products;
pub mod get_search_suggestions;
pub mod update_product;
