pub mod customer;
pub mod customer_history;
pub mod user;

pub use customer::*;
pub use customer_history::*;
pub use user::*;
