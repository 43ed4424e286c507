use chrono::{DateTime, Utc};
use customer_core_api::domain::CustomerHistoryView;
use serde::{Deserialize, Serialize};

use crate::models::customer::customer::CustomerDetails;
use crate::models::identifiable::Identifiable;
use crate::utils::hash_as_i64;

/// Database model for Customer history
///
/// # Documentation
/// - Append-only copy of a customer's values as they were before an update.
/// - Written in the same transaction as the update it documents, never
///   modified or deleted afterwards.
/// - `user_id` is the owner before the update, not the user performing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerHistoryModel {
    /// Assigned by the store; 0 until inserted
    pub id: i64,
    /// References CustomerModel.id
    pub customer_id: i64,
    /// References UserModel.id
    pub user_id: i64,
    #[serde(flatten)]
    pub details: CustomerDetails,
    /// Hash of (customer_id, user_id, details) for tamper detection
    pub hash: i64,
    pub created_at: DateTime<Utc>,
}

impl CustomerHistoryModel {
    pub fn new(
        customer_id: i64,
        user_id: i64,
        details: CustomerDetails,
        created_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        let mut model = CustomerHistoryModel {
            id: 0,
            customer_id,
            user_id,
            details,
            hash: 0,
            created_at,
        };
        model.hash = model.compute_hash()?;
        Ok(model)
    }

    pub fn compute_hash(&self) -> Result<i64, String> {
        hash_as_i64(&(self.customer_id, self.user_id, &self.details))
    }

    pub fn verify_hash(&self) -> Result<bool, String> {
        Ok(self.compute_hash()? == self.hash)
    }
}

impl Identifiable for CustomerHistoryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl From<CustomerHistoryModel> for CustomerHistoryView {
    fn from(model: CustomerHistoryModel) -> Self {
        let details = model.details;
        CustomerHistoryView {
            id: model.id,
            customer_id: model.customer_id,
            user_id: model.user_id,
            fullname: details.fullname.to_string(),
            company: details.company.to_string(),
            address: details.address.to_string(),
            phone: details.phone.to_string(),
            email: details.email.to_string(),
            birthday: details.birthday,
            product: details.product.to_string(),
            note: details.note.to_string(),
            created_at: model.created_at,
        }
    }
}
