pub mod criteria;
pub mod entities;
pub mod ports;
pub mod services;
pub mod sorting;
pub mod value_objects;
