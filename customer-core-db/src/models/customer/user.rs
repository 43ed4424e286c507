use chrono::{DateTime, Utc};
use customer_core_api::domain::UserView;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::utils::utf8_capacity;

/// Database model for User
///
/// Users are read-only here: they are resolved by username to own customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: i64,
    pub username: HeaplessString<{ utf8_capacity(50) }>,
    pub fullname: HeaplessString<{ utf8_capacity(100) }>,
    #[serde(skip_serializing)]
    pub password: HeaplessString<{ utf8_capacity(255) }>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for UserModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Public part of a user joined onto a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummaryModel {
    pub username: HeaplessString<{ utf8_capacity(50) }>,
    pub fullname: HeaplessString<{ utf8_capacity(100) }>,
}

impl From<UserSummaryModel> for UserView {
    fn from(model: UserSummaryModel) -> Self {
        UserView {
            username: model.username.to_string(),
            fullname: model.fullname.to_string(),
        }
    }
}
