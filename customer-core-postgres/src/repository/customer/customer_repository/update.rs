use async_trait::async_trait;
use customer_core_db::models::customer::customer::CustomerModel;
use customer_core_db::repository::update::Update;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerRepositoryImpl,
        item: CustomerModel,
    ) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        let details = &item.details;
        let query = sqlx::query(
            r#"
            UPDATE customer SET
                fullname = $2, company = $3, address = $4, phone = $5, email = $6,
                birthday = $7, product = $8, note = $9, user_id = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(details.fullname.as_str())
        .bind(details.company.as_str())
        .bind(details.address.as_str())
        .bind(details.phone.as_str())
        .bind(details.email.as_str())
        .bind(details.birthday)
        .bind(details.product.as_str())
        .bind(details.note.as_str())
        .bind(item.user_id);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        let row = row.ok_or_else(|| format!("Customer {} does not exist", item.id))?;
        CustomerModel::try_from_row(&row)
    }
}

#[async_trait]
impl Update<Postgres, CustomerModel> for CustomerRepositoryImpl {
    async fn update(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::test_utils::{create_test_customer, create_test_details, create_test_user};
    use crate::test_helper::{random, setup_test_context};
    use crate::utils::is_unique_violation;
    use customer_core_db::repository::update::Update;

    #[tokio::test]
    async fn test_update_overwrites_fields_and_owner() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let owner = create_test_user(ctx.executor(), &format!("owner-{}", random(8))).await?;
        let editor = create_test_user(ctx.executor(), &format!("editor-{}", random(8))).await?;
        let customer = create_test_customer(customer_repo, owner.id, "Bob").await?;

        let mut changed = customer.clone();
        changed.details = create_test_details("Robert");
        changed.user_id = editor.id;
        let updated = customer_repo.update(changed.clone()).await?;

        assert_eq!(updated.id, customer.id);
        assert_eq!(updated.details, changed.details);
        assert_eq!(updated.user_id, editor.id);
        assert_eq!(updated.created_at, customer.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_customer_fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let owner = create_test_user(ctx.executor(), &format!("owner-{}", random(8))).await?;
        let mut customer = create_test_customer(customer_repo, owner.id, "Bob").await?;
        customer.id = i64::MAX;

        assert!(customer_repo.update(customer).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_taken_email_violates_constraint() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let owner = create_test_user(ctx.executor(), &format!("owner-{}", random(8))).await?;
        let bob = create_test_customer(customer_repo, owner.id, "Bob").await?;
        let mut carol = create_test_customer(customer_repo, owner.id, "Carol").await?;

        carol.details.email = bob.details.email.clone();
        let err = customer_repo.update(carol).await.unwrap_err();
        assert!(is_unique_violation(&*err));

        Ok(())
    }
}
