pub mod repo_impl;
pub mod find_by_username;

pub use repo_impl::UserRepositoryImpl;
