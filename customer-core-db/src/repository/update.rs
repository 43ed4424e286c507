use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for overwriting an existing entity
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<DB: Database, T: Identifiable + Send + 'static>: Send + Sync {
    /// Overwrite the stored entity whose id matches `item`
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored after the update
    /// * `Err` - An error if no row matched or the update failed
    async fn update(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
