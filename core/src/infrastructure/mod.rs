pub mod db;
pub mod department;
pub mod health;
pub mod product;
pub mod seed;
