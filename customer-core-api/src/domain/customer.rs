use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer attributes submitted on create and update.
///
/// Bounds mirror the column widths of the `customer` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerFields {
    #[validate(length(max = 100))]
    pub fullname: String,
    #[validate(length(max = 100))]
    pub company: String,
    #[validate(length(max = 255))]
    pub address: String,
    #[validate(length(min = 1, max = 20))]
    pub phone: String,
    #[validate(length(min = 1, max = 100))]
    pub email: String,
    pub birthday: NaiveDate,
    #[validate(length(max = 100))]
    pub product: String,
    #[validate(length(max = 500))]
    pub note: String,
}

/// Reduced view returned after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProjection {
    pub fullname: String,
    pub company: String,
    pub product: String,
}

/// Owner details exposed next to a customer. Never carries the user id,
/// password or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    pub fullname: String,
}

/// Customer joined with its owner, without the raw `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: i64,
    pub fullname: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub product: String,
    pub note: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "User")]
    pub user: UserView,
}

/// One audit snapshot of a customer's state before an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerHistoryView {
    pub id: i64,
    pub customer_id: i64,
    /// Owner of the customer at the time of the snapshot
    pub user_id: i64,
    pub fullname: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub product: String,
    pub note: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
