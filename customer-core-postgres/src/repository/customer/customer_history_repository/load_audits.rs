use async_trait::async_trait;
use customer_core_db::models::customer::{customer::CustomerModel, customer_history::CustomerHistoryModel};
use customer_core_db::repository::load_audits::LoadAudits;
use customer_core_db::repository::pagination::{Page, PageRequest};
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CustomerHistoryRepositoryImpl;

impl CustomerHistoryRepositoryImpl {
    pub(super) async fn load_audits_impl(
        repo: &CustomerHistoryRepositoryImpl,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<CustomerHistoryModel>, Box<dyn Error + Send + Sync>> {
        let count_query = r#"SELECT COUNT(*) as count FROM customer_history WHERE customer_id = $1"#;
        let total: i64 = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query_scalar(count_query)
                .bind(customer_id)
                .fetch_one(&mut **transaction)
                .await?
        };

        // Newest snapshot first
        let query = r#"
            SELECT * FROM customer_history
            WHERE customer_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
        "#;

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query)
                .bind(customer_id)
                .bind(i64::try_from(page.limit).unwrap_or(i64::MAX))
                .bind(i64::try_from(page.offset).unwrap_or(i64::MAX))
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(CustomerHistoryModel::try_from_row(&row)?);
        }

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl LoadAudits<Postgres, CustomerModel> for CustomerHistoryRepositoryImpl {
    async fn load_audits(
        &self,
        id: i64,
        page: PageRequest,
    ) -> Result<Page<CustomerHistoryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_audits_impl(self, id, page).await
    }
}
