use customer_core_db::models::customer::user::UserModel;
use crate::utils::TryFromRow;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    /// Resolve the acting user of a request. Always reads from the store.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM app_user WHERE username = $1"#).bind(username);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| UserModel::try_from_row(&row)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::customer::test_utils::create_test_user;
    use crate::test_helper::{random, setup_test_context};
    use customer_core_db::repository::find_by_id::FindById;

    #[tokio::test]
    async fn test_find_by_username() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.customer_repos().user_repository;

        let username = format!("user-{}", random(8));
        let user = create_test_user(ctx.executor(), &username).await?;

        let found = user_repo.find_by_username(&username).await?;
        assert!(found.is_some());
        let found = found.unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.username.as_str(), username);

        let by_id = user_repo.find_by_id(user.id).await?;
        assert_eq!(by_id.map(|u| u.username), Some(found.username));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_username_multibyte_at_column_width() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.customer_repos().user_repository;

        let username = format!("{}{}", "ü".repeat(42), random(8));
        assert_eq!(username.chars().count(), 50);
        create_test_user(ctx.executor(), &username).await?;

        let found = user_repo.find_by_username(&username).await?;
        assert_eq!(found.map(|u| u.username.to_string()), Some(username));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_username_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.customer_repos().user_repository;

        let found = user_repo.find_by_username(&format!("ghost-{}", random(8))).await?;
        assert!(found.is_none());

        Ok(())
    }
}
