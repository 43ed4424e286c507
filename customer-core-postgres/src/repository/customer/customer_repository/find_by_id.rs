use async_trait::async_trait;
use customer_core_db::models::customer::customer::{CustomerModel, CustomerWithUserModel};
use customer_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{CustomerRepositoryImpl, CUSTOMER_WITH_USER_SELECT};

impl CustomerRepositoryImpl {
    /// Load a customer and lock its row until the transaction ends.
    ///
    /// Used by update so that the history snapshot and the overwrite see the
    /// same state.
    pub async fn find_by_id_for_update(
        &self,
        id: i64,
    ) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM customer WHERE id = $1 FOR UPDATE"#).bind(id);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| CustomerModel::try_from_row(&row)).transpose()
    }

    pub async fn find_with_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<CustomerWithUserModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!("{CUSTOMER_WITH_USER_SELECT} WHERE c.id = $1");
        let query = sqlx::query(&sql).bind(id);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| CustomerWithUserModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, CustomerModel> for CustomerRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM customer WHERE id = $1"#).bind(id);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| CustomerModel::try_from_row(&row)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::test_utils::{create_test_customer, create_test_user};
    use crate::test_helper::{random, setup_test_context};
    use customer_core_db::models::customer::customer::CustomerModel;
    use customer_core_db::repository::find_by_id::FindById;

    #[tokio::test]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let user = create_test_user(ctx.executor(), &format!("user-{}", random(8))).await?;
        let customer = create_test_customer(customer_repo, user.id, "Bob").await?;

        let found: Option<CustomerModel> = customer_repo.find_by_id(customer.id).await?;
        assert_eq!(found, Some(customer.clone()));

        let locked = customer_repo.find_by_id_for_update(customer.id).await?;
        assert_eq!(locked, Some(customer));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_with_user_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let username = format!("user-{}", random(8));
        let user = create_test_user(ctx.executor(), &username).await?;
        let customer = create_test_customer(customer_repo, user.id, "Bob").await?;

        let found = customer_repo.find_with_user_by_id(customer.id).await?.unwrap();
        assert_eq!(found.id, customer.id);
        assert_eq!(found.details, customer.details);
        assert_eq!(found.user.username.as_str(), username);

        assert!(customer_repo.find_with_user_by_id(i64::MAX).await?.is_none());

        Ok(())
    }
}
