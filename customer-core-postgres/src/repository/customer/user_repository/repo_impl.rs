use async_trait::async_trait;
use customer_core_db::models::customer::user::UserModel;
use customer_core_db::repository::find_by_id::FindById;
use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Postgres, Row};
use std::error::Error;

pub struct UserRepositoryImpl {
    pub(crate) executor: Executor,
}

impl UserRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            username: get_heapless_string(row, "username")?,
            fullname: get_heapless_string(row, "fullname")?,
            password: get_heapless_string(row, "password")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl FindById<Postgres, UserModel> for UserRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM app_user WHERE id = $1"#).bind(id);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        row.map(|row| UserModel::try_from_row(&row)).transpose()
    }
}
