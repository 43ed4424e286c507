use async_trait::async_trait;

use crate::domain::{CustomerFields, CustomerHistoryView, CustomerProjection, CustomerView};
use crate::error::ApiResult;
use crate::pagination::{Page, PageRequest, ScrollPage, ScrollRequest};

/// Customer access operations exposed to the request boundary.
///
/// Every call is independent and reads fresh state from the store.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Create a customer owned by `acting_username`.
    ///
    /// # Errors
    /// * `NotFound` if the user does not exist
    /// * `Conflict` if another customer already uses the phone or email
    async fn create(
        &self,
        acting_username: &str,
        fields: CustomerFields,
    ) -> ApiResult<CustomerProjection>;

    /// Keyword search over fullname and company, paginated by id cursor.
    async fn get_by_scroll(&self, request: ScrollRequest) -> ApiResult<ScrollPage<CustomerView>>;

    /// # Errors
    /// * `NotFound` if the customer does not exist
    async fn get_by_id(&self, id: i64) -> ApiResult<CustomerView>;

    /// Overwrite a customer, record its previous state in the history and
    /// transfer ownership to `acting_username`.
    ///
    /// # Errors
    /// * `NotFound` if the customer or the user does not exist
    /// * `Forbidden` if another customer already uses the phone or email
    async fn update(&self, id: i64, acting_username: &str, fields: CustomerFields) -> ApiResult<()>;

    /// History snapshots of a customer, newest first.
    async fn get_history(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> ApiResult<Page<CustomerHistoryView>>;
}
