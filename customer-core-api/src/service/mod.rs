pub mod customer_service;

pub use customer_service::*;
