pub mod ports;
pub mod services;
pub mod transform;
pub mod value_objects;
