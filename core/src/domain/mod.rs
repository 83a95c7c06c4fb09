pub mod common;
pub mod department;
pub mod health;
pub mod product;
pub mod seed;
pub mod stats;
