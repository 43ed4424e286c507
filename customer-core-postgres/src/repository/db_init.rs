//! Schema setup and teardown from the SQL scripts shipped with the crate.
//!
//! `migrations/` scripts run in ascending file-name order, `cleanup/` scripts
//! in descending order. Every script is idempotent, so setup may run on each
//! start. Runs are serialized across processes with a Postgres advisory lock.

use sqlx::{PgConnection, PgPool};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Advisory lock key held while scripts run.
const SCHEMA_LOCK_KEY: i64 = 0x6375_7374_6f6d_6572;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOrder {
    Ascending,
    Descending,
}

/// Create the customer schema if it does not exist yet.
///
/// # Example
///
/// ```rust,no_run
/// use customer_core_postgres::repository::db_init::init_database;
/// use customer_core_postgres::DatabaseConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let pool = DatabaseConfig::from_env()?.connect().await?;
/// init_database(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_scripts(pool, &script_dir("migrations"), ScriptOrder::Ascending).await
}

/// Drop every table of the customer schema, data included.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_scripts(pool, &script_dir("cleanup"), ScriptOrder::Descending).await
}

fn script_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// The `.sql` files of `dir` sorted by file name.
fn sql_scripts(dir: &Path, order: ScriptOrder) -> Result<Vec<PathBuf>, sqlx::Error> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if order == ScriptOrder::Descending {
        scripts.reverse();
    }
    Ok(scripts)
}

async fn run_scripts(pool: &PgPool, dir: &Path, order: ScriptOrder) -> Result<(), sqlx::Error> {
    let scripts = sql_scripts(dir, order)?;

    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    let result = execute_scripts(&mut conn, &scripts).await;

    sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    result?;
    info!(dir = %dir.display(), scripts = scripts.len(), "Schema scripts applied");
    Ok(())
}

async fn execute_scripts(conn: &mut PgConnection, scripts: &[PathBuf]) -> Result<(), sqlx::Error> {
    for path in scripts {
        let sql = fs::read_to_string(path).map_err(sqlx::Error::Io)?;
        debug!(file = %path.display(), "Executing SQL file");
        sqlx::raw_sql(&sql).execute(&mut *conn).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use serial_test::serial;

    fn file_names(scripts: &[PathBuf]) -> Vec<String> {
        scripts
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_scripts_sorted_by_direction() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let up = sql_scripts(&script_dir("migrations"), ScriptOrder::Ascending)?;
        let names = file_names(&up);
        assert!(names.contains(&"20250101000001_customer_schema.sql".to_string()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let down = file_names(&sql_scripts(&script_dir("cleanup"), ScriptOrder::Descending)?);
        let mut reversed = down.clone();
        reversed.sort();
        reversed.reverse();
        assert_eq!(down, reversed);

        Ok(())
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let err = sql_scripts(&script_dir("no-such-dir"), ScriptOrder::Ascending).unwrap_err();
        assert!(matches!(err, sqlx::Error::Io(_)));
    }

    #[tokio::test]
    #[serial]
    async fn test_init_is_idempotent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = DatabaseConfig::from_env()?.with_max_connections(1).connect().await?;

        init_database(&pool).await?;
        init_database(&pool).await?;

        let tables: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM information_schema.tables
            WHERE table_name IN ('app_user', 'customer', 'customer_history')
            "#,
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(tables, 3);

        Ok(())
    }

    /// Drops all data; run on a dedicated database only.
    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_cleanup_then_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = DatabaseConfig::from_env()?.with_max_connections(1).connect().await?;

        cleanup_database(&pool).await?;
        let tables: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'customer'"#,
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(tables, 0);

        init_database(&pool).await?;

        Ok(())
    }
}
