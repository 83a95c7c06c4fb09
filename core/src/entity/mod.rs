//! sea-orm entities for the catalog tables.

pub mod departments;
pub mod products;
