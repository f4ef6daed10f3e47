pub mod entity;
pub mod ports;
pub mod validation;
pub mod value_objects;
