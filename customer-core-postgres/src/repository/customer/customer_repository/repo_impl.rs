use customer_core_db::models::customer::{
    customer::{CustomerDetails, CustomerModel, CustomerWithUserModel},
    user::UserSummaryModel,
};
use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Customer columns joined with the public columns of the owning user.
///
/// The customer's `user_id` and the user's id, password and timestamps are
/// never selected.
pub(crate) const CUSTOMER_WITH_USER_SELECT: &str = r#"
    SELECT c.id, c.fullname, c.company, c.address, c.phone, c.email, c.birthday,
           c.product, c.note, c.created_at, c.updated_at,
           u.username AS user_username, u.fullname AS user_fullname
    FROM customer c
    JOIN app_user u ON u.id = c.user_id
"#;

pub struct CustomerRepositoryImpl {
    pub(crate) executor: Executor,
}

impl CustomerRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CustomerDetails {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CustomerDetails {
            fullname: get_heapless_string(row, "fullname")?,
            company: get_heapless_string(row, "company")?,
            address: get_heapless_string(row, "address")?,
            phone: get_heapless_string(row, "phone")?,
            email: get_heapless_string(row, "email")?,
            birthday: row.try_get("birthday")?,
            product: get_heapless_string(row, "product")?,
            note: get_heapless_string(row, "note")?,
        })
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CustomerModel {
            id: row.try_get("id")?,
            details: CustomerDetails::try_from_row(row)?,
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for CustomerWithUserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CustomerWithUserModel {
            id: row.try_get("id")?,
            details: CustomerDetails::try_from_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            user: UserSummaryModel {
                username: get_heapless_string(row, "user_username")?,
                fullname: get_heapless_string(row, "user_fullname")?,
            },
        })
    }
}
