use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    /// Find a customer already using `phone` or `email`.
    ///
    /// Either match is a conflict. The customer identified by `exclude_id`
    /// is ignored so that an update may keep its own phone and email.
    ///
    /// # Returns
    /// * `Ok(Some(id))` - The id of one conflicting customer
    /// * `Ok(None)` - If neither value is in use
    pub async fn find_conflicting(
        &self,
        phone: &str,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM customer
            WHERE (phone = $1 OR email = $2)
              AND ($3::BIGINT IS NULL OR id <> $3)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(phone)
        .bind(email)
        .bind(exclude_id);

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        Ok(query.fetch_optional(&mut **transaction).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::test_utils::{create_test_customer, create_test_user};
    use crate::test_helper::{random, setup_test_context};

    #[tokio::test]
    async fn test_find_conflicting_by_phone_or_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let user = create_test_user(ctx.executor(), &format!("user-{}", random(8))).await?;
        let customer = create_test_customer(customer_repo, user.id, "Bob").await?;
        let phone = customer.details.phone.as_str();
        let email = customer.details.email.as_str();

        let unused_phone = random(15);
        let unused_email = format!("{}@unused.test", random(10));

        assert_eq!(customer_repo.find_conflicting(phone, &unused_email, None).await?, Some(customer.id));
        assert_eq!(customer_repo.find_conflicting(&unused_phone, email, None).await?, Some(customer.id));
        assert_eq!(customer_repo.find_conflicting(&unused_phone, &unused_email, None).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_find_conflicting_excludes_self() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = &ctx.customer_repos().customer_repository;
        let user = create_test_user(ctx.executor(), &format!("user-{}", random(8))).await?;
        let bob = create_test_customer(customer_repo, user.id, "Bob").await?;
        let carol = create_test_customer(customer_repo, user.id, "Carol").await?;

        let found = customer_repo
            .find_conflicting(bob.details.phone.as_str(), bob.details.email.as_str(), Some(bob.id))
            .await?;
        assert_eq!(found, None);

        let found = customer_repo
            .find_conflicting(bob.details.phone.as_str(), carol.details.email.as_str(), Some(bob.id))
            .await?;
        assert_eq!(found, Some(carol.id));

        Ok(())
    }
}
