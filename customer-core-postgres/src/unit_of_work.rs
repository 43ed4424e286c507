//! Transaction sharing for repositories of one unit of work.
//!
//! Every repository built for a session holds a clone of the same
//! [`Executor`]; all of their statements run on one database transaction,
//! which is finished exactly once by [`Executor::commit`] or
//! [`Executor::rollback`]. Dropping the last clone without committing rolls
//! the transaction back.

use sqlx::{Postgres, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    /// Whether the transaction has not been committed or rolled back yet.
    pub async fn is_active(&self) -> bool {
        self.tx.lock().await.is_some()
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        Ok(())
    }
}
