pub mod get_health;
pub mod get_root;
