use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use crate::repository::customer::CustomerRepositories;
use crate::unit_of_work::Executor;

/// Entry point to the store: owns the pool and opens one transaction per unit of work.
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create all customer repositories sharing a single new transaction
    pub async fn create_customer_repositories(
        &self,
    ) -> Result<CustomerRepositories, Box<dyn Error + Send + Sync>> {
        let tx = self.pool.begin().await?;
        debug!("Transaction started");
        Ok(CustomerRepositories::build_all_repos(Executor::new(tx)))
    }
}
