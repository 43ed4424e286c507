use customer_core_db::models::customer::customer::CustomerWithUserModel;
use customer_core_db::repository::pagination::ScrollRequest;
use crate::utils::{like_pattern, TryFromRow};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::{CustomerRepositoryImpl, CUSTOMER_WITH_USER_SELECT};

/// Builds the bound scroll query for `request`.
///
/// Filters on the search key over fullname or company, restricts to ids
/// after the cursor when one is given, orders by id ascending and caps the
/// result at the request limit.
pub(crate) fn build_scroll_query(request: &ScrollRequest) -> QueryBuilder<'static, Postgres> {
    let pattern = like_pattern(&request.key);

    let mut builder = QueryBuilder::<Postgres>::new(CUSTOMER_WITH_USER_SELECT);
    builder.push(" WHERE (c.fullname LIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" ESCAPE '\\' OR c.company LIKE ");
    builder.push_bind(pattern);
    builder.push(" ESCAPE '\\')");

    if request.has_cursor() {
        builder.push(" AND c.id > ");
        builder.push_bind(request.cursor);
    }

    builder.push(" ORDER BY c.id ASC LIMIT ");
    builder.push_bind(request.limit.max(0));
    builder
}

impl CustomerRepositoryImpl {
    /// One page of customers for the scroll listing, joined with their owners.
    pub async fn scroll(
        &self,
        request: &ScrollRequest,
    ) -> Result<Vec<CustomerWithUserModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = build_scroll_query(request);

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(CustomerWithUserModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}
