pub mod customer_history_repository;
pub mod customer_repository;
pub mod factory;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use customer_history_repository::CustomerHistoryRepositoryImpl;
pub use customer_repository::CustomerRepositoryImpl;
pub use factory::CustomerRepositories;
pub use user_repository::UserRepositoryImpl;
