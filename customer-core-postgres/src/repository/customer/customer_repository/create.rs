use async_trait::async_trait;
use customer_core_db::models::customer::customer::{CustomerModel, NewCustomerModel};
use customer_core_db::repository::create::Create;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerRepositoryImpl,
        item: NewCustomerModel,
    ) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        let details = &item.details;
        let query = sqlx::query(
            r#"
            INSERT INTO customer
            (fullname, company, address, phone, email, birthday, product, note, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
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
            query.fetch_one(&mut **transaction).await?
        };

        CustomerModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, NewCustomerModel, CustomerModel> for CustomerRepositoryImpl {
    async fn create(&self, item: NewCustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
