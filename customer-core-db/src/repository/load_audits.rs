use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Auditable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for loading the history snapshots of an entity with pagination
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Auditable trait
///
/// # Example
/// ```ignore
/// use customer_core_db::repository::pagination::PageRequest;
///
/// let page = history_repo.load_audits(customer_id, PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadAudits<DB: Database, T: Auditable>: Send + Sync
where
    T::Snapshot: Send,
{
    /// Load one page of snapshots for the entity, newest first
    ///
    /// # Arguments
    /// * `id` - The id of the entity whose snapshots should be loaded
    /// * `page` - The pagination parameters (limit and offset)
    async fn load_audits(
        &self,
        id: i64,
        page: PageRequest,
    ) -> Result<Page<T::Snapshot>, Box<dyn std::error::Error + Send + Sync>>;
}
