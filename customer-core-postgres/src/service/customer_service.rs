use async_trait::async_trait;
use chrono::Utc;
use customer_core_api::domain::{CustomerFields, CustomerHistoryView, CustomerProjection, CustomerView};
use customer_core_api::error::{ApiError, ApiResult};
use customer_core_api::pagination::{Page, PageRequest, ScrollPage, ScrollRequest};
use customer_core_api::service::CustomerService;
use customer_core_db::models::auditable::Auditable;
use customer_core_db::models::customer::customer::{CustomerDetails, CustomerModel, NewCustomerModel};
use customer_core_db::repository::create::Create;
use customer_core_db::repository::find_by_id::FindById;
use customer_core_db::repository::load_audits::LoadAudits;
use customer_core_db::repository::update::Update;
use std::error::Error;
use tracing::{debug, error, instrument, warn};
use validator::Validate;

use crate::postgres_repositories::PostgresRepositories;
use crate::repository::customer::CustomerRepositories;
use crate::utils::is_unique_violation;

type StoreError = Box<dyn Error + Send + Sync>;

fn store_error(err: StoreError) -> ApiError {
    error!(error = %err, "Store operation failed");
    ApiError::DatabaseError(err.to_string())
}

/// Unique violations raised by the store surface as `duplicate`; anything else is a store failure.
fn store_error_or(duplicate: fn() -> ApiError) -> impl Fn(StoreError) -> ApiError {
    move |err| {
        if is_unique_violation(err.as_ref()) {
            warn!(error = %err, "Unique constraint rejected write");
            duplicate()
        } else {
            store_error(err)
        }
    }
}

fn to_details(fields: &CustomerFields) -> ApiResult<CustomerDetails> {
    fields.validate().map_err(|errors| {
        debug!(%errors, "Rejected customer fields");
        ApiError::from(errors)
    })?;
    CustomerDetails::try_from(fields).map_err(ApiError::ValidationError)
}

async fn create_customer(
    repos: &CustomerRepositories,
    acting_username: &str,
    details: CustomerDetails,
) -> ApiResult<CustomerModel> {
    let user = repos
        .user_repository
        .find_by_username(acting_username)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            debug!(acting_username, "Acting user not found");
            ApiError::user_not_found()
        })?;

    if let Some(existing_id) = repos
        .customer_repository
        .find_conflicting(details.phone.as_str(), details.email.as_str(), None)
        .await
        .map_err(store_error)?
    {
        warn!(existing_id, "Phone or email already used by another customer");
        return Err(ApiError::duplicate_on_create());
    }

    repos
        .customer_repository
        .create(NewCustomerModel {
            details,
            user_id: user.id,
        })
        .await
        .map_err(store_error_or(ApiError::duplicate_on_create))
}

async fn update_customer(
    repos: &CustomerRepositories,
    id: i64,
    acting_username: &str,
    details: CustomerDetails,
) -> ApiResult<CustomerModel> {
    let current = repos
        .customer_repository
        .find_by_id_for_update(id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            debug!(id, "Customer not found");
            ApiError::customer_not_found()
        })?;

    let user = repos
        .user_repository
        .find_by_username(acting_username)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            debug!(acting_username, "Acting user not found");
            ApiError::user_not_found()
        })?;

    if let Some(existing_id) = repos
        .customer_repository
        .find_conflicting(details.phone.as_str(), details.email.as_str(), Some(id))
        .await
        .map_err(store_error)?
    {
        warn!(id, existing_id, "Phone or email already used by another customer");
        return Err(ApiError::duplicate_on_update());
    }

    let snapshot = current.snapshot(Utc::now()).map_err(ApiError::InternalError)?;
    repos
        .customer_history_repository
        .create(snapshot)
        .await
        .map_err(store_error)?;

    let updated = CustomerModel {
        details,
        user_id: user.id,
        ..current
    };
    repos
        .customer_repository
        .update(updated)
        .await
        .map_err(store_error_or(ApiError::duplicate_on_update))
}

async fn scroll_customers(
    repos: &CustomerRepositories,
    request: &ScrollRequest,
) -> ApiResult<ScrollPage<CustomerView>> {
    let rows = repos
        .customer_repository
        .scroll(request)
        .await
        .map_err(store_error)?;
    Ok(ScrollPage::from_items(rows, request.limit, |row| row.id).map(CustomerView::from))
}

async fn customer_by_id(repos: &CustomerRepositories, id: i64) -> ApiResult<CustomerView> {
    repos
        .customer_repository
        .find_with_user_by_id(id)
        .await
        .map_err(store_error)?
        .map(CustomerView::from)
        .ok_or_else(|| {
            debug!(id, "Customer not found");
            ApiError::customer_not_found()
        })
}

async fn customer_history(
    repos: &CustomerRepositories,
    customer_id: i64,
    page: PageRequest,
) -> ApiResult<Page<CustomerHistoryView>> {
    if repos
        .customer_repository
        .find_by_id(customer_id)
        .await
        .map_err(store_error)?
        .is_none()
    {
        debug!(customer_id, "Customer not found");
        return Err(ApiError::customer_not_found());
    }

    let audits = repos
        .customer_history_repository
        .load_audits(customer_id, page)
        .await
        .map_err(store_error)?;
    Ok(audits.map(CustomerHistoryView::from))
}

/// [`CustomerService`] backed by Postgres. Each call runs in its own transaction.
#[derive(Clone)]
pub struct CustomerServiceImpl {
    repositories: PostgresRepositories,
}

impl CustomerServiceImpl {
    pub fn new(repositories: PostgresRepositories) -> Self {
        Self { repositories }
    }

    async fn begin(&self) -> ApiResult<CustomerRepositories> {
        self.repositories
            .create_customer_repositories()
            .await
            .map_err(store_error)
    }

    /// Commit on success, roll back on failure. The operation's own error wins over a failed rollback.
    async fn finish<T>(&self, repos: CustomerRepositories, result: ApiResult<T>) -> ApiResult<T> {
        match result {
            Ok(value) => {
                repos.commit().await.map_err(store_error)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = repos.rollback().await {
                    error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    #[instrument(skip(self, fields))]
    async fn create(
        &self,
        acting_username: &str,
        fields: CustomerFields,
    ) -> ApiResult<CustomerProjection> {
        let details = to_details(&fields)?;
        let repos = self.begin().await?;
        let result = create_customer(&repos, acting_username, details).await;
        let created = self.finish(repos, result).await?;
        debug!(id = created.id, "Customer created");
        Ok(created.to_projection())
    }

    #[instrument(skip(self))]
    async fn get_by_scroll(&self, request: ScrollRequest) -> ApiResult<ScrollPage<CustomerView>> {
        let repos = self.begin().await?;
        let result = scroll_customers(&repos, &request).await;
        self.finish(repos, result).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ApiResult<CustomerView> {
        let repos = self.begin().await?;
        let result = customer_by_id(&repos, id).await;
        self.finish(repos, result).await
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, id: i64, acting_username: &str, fields: CustomerFields) -> ApiResult<()> {
        let details = to_details(&fields)?;
        let repos = self.begin().await?;
        let result = update_customer(&repos, id, acting_username, details).await;
        self.finish(repos, result).await?;
        debug!(id, "Customer updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_history(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> ApiResult<Page<CustomerHistoryView>> {
        let repos = self.begin().await?;
        let result = customer_history(&repos, customer_id, page).await;
        self.finish(repos, result).await
    }
}
