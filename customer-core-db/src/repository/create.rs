use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a new entity
///
/// The input carries no id; the store assigns it together with any other
/// generated columns and the saved entity is returned.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `N` - The insertable form of the entity
/// * `T` - The stored entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<DB: Database, N: Send + 'static, T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(T)` - The created entity with generated fields populated
    /// * `Err` - An error if the insert failed, including constraint violations
    async fn create(&self, item: N) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
