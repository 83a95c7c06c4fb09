pub mod department;
pub mod health;
pub mod product;
pub mod query_extractor;
pub mod server;
pub mod stats;
