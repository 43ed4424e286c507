use async_trait::async_trait;
use customer_core_db::models::customer::customer_history::CustomerHistoryModel;
use customer_core_db::repository::create::Create;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CustomerHistoryRepositoryImpl;

impl CustomerHistoryRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerHistoryRepositoryImpl,
        item: CustomerHistoryModel,
    ) -> Result<CustomerHistoryModel, Box<dyn Error + Send + Sync>> {
        if !item.verify_hash()? {
            return Err(format!("Hash mismatch on history snapshot of customer {}", item.customer_id).into());
        }

        let details = &item.details;
        let query = sqlx::query(
            r#"
            INSERT INTO customer_history
            (customer_id, user_id, fullname, company, address, phone, email, birthday, product, note, hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(item.customer_id)
        .bind(item.user_id)
        .bind(details.fullname.as_str())
        .bind(details.company.as_str())
        .bind(details.address.as_str())
        .bind(details.phone.as_str())
        .bind(details.email.as_str())
        .bind(details.birthday)
        .bind(details.product.as_str())
        .bind(details.note.as_str())
        .bind(item.hash)
        .bind(item.created_at);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        CustomerHistoryModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, CustomerHistoryModel, CustomerHistoryModel> for CustomerHistoryRepositoryImpl {
    async fn create(&self, item: CustomerHistoryModel) -> Result<CustomerHistoryModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
