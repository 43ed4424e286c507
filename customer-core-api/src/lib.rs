pub mod domain;
pub mod pagination;
pub mod response;
pub mod service;
pub mod error;

pub use error::*;
pub use domain::*;
pub use pagination::*;
pub use response::*;
pub use service::*;
