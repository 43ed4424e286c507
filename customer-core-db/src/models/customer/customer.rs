use chrono::{DateTime, NaiveDate, Utc};
use customer_core_api::domain::{CustomerFields, CustomerProjection, CustomerView};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::auditable::Auditable;
use crate::models::customer::customer_history::CustomerHistoryModel;
use crate::models::customer::user::UserSummaryModel;
use crate::models::identifiable::Identifiable;
use crate::utils::utf8_capacity;

/// Mutable attributes of a customer, shared by the live row and its history snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub fullname: HeaplessString<{ utf8_capacity(100) }>,
    pub company: HeaplessString<{ utf8_capacity(100) }>,
    pub address: HeaplessString<{ utf8_capacity(255) }>,
    /// Unique across all customers
    pub phone: HeaplessString<{ utf8_capacity(20) }>,
    /// Unique across all customers
    pub email: HeaplessString<{ utf8_capacity(100) }>,
    pub birthday: NaiveDate,
    pub product: HeaplessString<{ utf8_capacity(100) }>,
    pub note: HeaplessString<{ utf8_capacity(500) }>,
}

fn bounded<const N: usize>(
    field: &str,
    value: &str,
    max_chars: usize,
) -> Result<HeaplessString<N>, String> {
    if value.chars().count() > max_chars {
        return Err(format!("Value for field '{field}' is too long (max {max_chars} chars)"));
    }
    HeaplessString::try_from(value)
        .map_err(|_| format!("Value for field '{field}' does not fit in {N} bytes"))
}

impl TryFrom<&CustomerFields> for CustomerDetails {
    type Error = String;

    fn try_from(fields: &CustomerFields) -> Result<Self, Self::Error> {
        Ok(CustomerDetails {
            fullname: bounded("fullname", &fields.fullname, 100)?,
            company: bounded("company", &fields.company, 100)?,
            address: bounded("address", &fields.address, 255)?,
            phone: bounded("phone", &fields.phone, 20)?,
            email: bounded("email", &fields.email, 100)?,
            birthday: fields.birthday,
            product: bounded("product", &fields.product, 100)?,
            note: bounded("note", &fields.note, 500)?,
        })
    }
}

/// Database model for Customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: i64,
    #[serde(flatten)]
    pub details: CustomerDetails,
    /// References UserModel.id of the current owner
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerModel {
    pub fn to_projection(&self) -> CustomerProjection {
        CustomerProjection {
            fullname: self.details.fullname.to_string(),
            company: self.details.company.to_string(),
            product: self.details.product.to_string(),
        }
    }
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Auditable for CustomerModel {
    type Snapshot = CustomerHistoryModel;

    fn snapshot(&self, taken_at: DateTime<Utc>) -> Result<CustomerHistoryModel, String> {
        CustomerHistoryModel::new(self.id, self.user_id, self.details.clone(), taken_at)
    }
}

/// Customer row to be inserted; id and timestamps are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomerModel {
    pub details: CustomerDetails,
    pub user_id: i64,
}

/// Customer joined with the public fields of its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerWithUserModel {
    pub id: i64,
    #[serde(flatten)]
    pub details: CustomerDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryModel,
}

impl Identifiable for CustomerWithUserModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl From<CustomerWithUserModel> for CustomerView {
    fn from(model: CustomerWithUserModel) -> Self {
        let details = model.details;
        CustomerView {
            id: model.id,
            fullname: details.fullname.to_string(),
            company: details.company.to_string(),
            address: details.address.to_string(),
            phone: details.phone.to_string(),
            email: details.email.to_string(),
            birthday: details.birthday,
            product: details.product.to_string(),
            note: details.note.to_string(),
            created_at: model.created_at,
            updated_at: model.updated_at,
            user: model.user.into(),
        }
    }
}
