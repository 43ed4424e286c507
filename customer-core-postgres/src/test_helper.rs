//! Test helper module for transaction-based test isolation
//!
//! Every context runs inside a database transaction that is rolled back
//! when the context is dropped, so tests never need explicit cleanup.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::db_init::init_database;
use crate::repository::customer::CustomerRepositories;
use crate::unit_of_work::Executor;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Test context that provides a transactional database session
pub struct TestContext {
    pub customer_repos: CustomerRepositories,
}

impl TestContext {
    pub fn customer_repos(&self) -> &CustomerRepositories {
        &self.customer_repos
    }

    pub fn executor(&self) -> &Executor {
        &self.customer_repos.executor
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn connect(max_connections: u32) -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let pool = DatabaseConfig::from_env()?
        .with_max_connections(max_connections)
        .connect()
        .await?;

    init_database(&pool).await?;

    Ok(PostgresRepositories::new(Arc::new(pool)))
}

/// Setup a test context with a transactional database session
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let customer_repo = &ctx.customer_repos().customer_repository;
///
///     // All changes are rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = connect(1).await?;
    let customer_repos = repos.create_customer_repositories().await?;
    Ok(TestContext { customer_repos })
}

/// Setup a shared PostgresRepositories for tests that commit in one
/// transaction and observe the result from another.
pub async fn setup_shared_repos() -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    connect(5).await
}

pub fn random(n: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::customer::test_utils::{create_test_customer, create_test_user};
    use customer_core_db::repository::find_by_id::FindById;

    #[tokio::test]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let customer_id = {
            let ctx = setup_test_context().await?;
            let repos = ctx.customer_repos();
            let user = create_test_user(ctx.executor(), &format!("user-{}", random(8))).await?;
            let customer = create_test_customer(&repos.customer_repository, user.id, "Bob").await?;

            assert!(repos.customer_repository.find_by_id(customer.id).await?.is_some());
            customer.id
        }; // Transaction is rolled back here when ctx is dropped

        let ctx = setup_test_context().await?;
        let found = ctx.customer_repos().customer_repository.find_by_id(customer_id).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let shared = setup_shared_repos().await?;
        let username = format!("user-{}", random(8));

        let repos = shared.create_customer_repositories().await?;
        create_test_user(&repos.executor, &username).await?;
        repos.rollback().await?;

        let repos = shared.create_customer_repositories().await?;
        assert!(repos.user_repository.find_by_username(&username).await?.is_none());

        Ok(())
    }
}
