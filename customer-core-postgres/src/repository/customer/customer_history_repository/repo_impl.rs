use customer_core_db::models::customer::{customer::CustomerDetails, customer_history::CustomerHistoryModel};
use crate::unit_of_work::Executor;
use crate::utils::TryFromRow;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct CustomerHistoryRepositoryImpl {
    pub(crate) executor: Executor,
}

impl CustomerHistoryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CustomerHistoryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CustomerHistoryModel {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            user_id: row.try_get("user_id")?,
            details: CustomerDetails::try_from_row(row)?,
            hash: row.try_get("hash")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
