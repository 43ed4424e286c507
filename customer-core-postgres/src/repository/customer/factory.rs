use std::error::Error;
use std::sync::Arc;

use crate::unit_of_work::Executor;

use super::{CustomerHistoryRepositoryImpl, CustomerRepositoryImpl, UserRepositoryImpl};

/// Container for all customer module repositories
///
/// All repositories share one [`Executor`], so everything done through a
/// `CustomerRepositories` value commits or rolls back together.
pub struct CustomerRepositories {
    pub executor: Executor,
    pub user_repository: Arc<UserRepositoryImpl>,
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub customer_history_repository: Arc<CustomerHistoryRepositoryImpl>,
}

impl CustomerRepositories {
    /// Build all customer repositories with the given executor
    pub fn build_all_repos(executor: Executor) -> Self {
        Self {
            user_repository: Arc::new(UserRepositoryImpl::new(executor.clone())),
            customer_repository: Arc::new(CustomerRepositoryImpl::new(executor.clone())),
            customer_history_repository: Arc::new(CustomerHistoryRepositoryImpl::new(executor.clone())),
            executor,
        }
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.executor.commit().await
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.executor.rollback().await
    }
}
