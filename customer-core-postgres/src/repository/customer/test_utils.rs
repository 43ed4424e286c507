use chrono::NaiveDate;
use customer_core_db::models::customer::customer::{CustomerDetails, CustomerModel, NewCustomerModel};
use customer_core_db::models::customer::user::UserModel;
use customer_core_db::repository::create::Create;
use heapless::String as HeaplessString;

use crate::repository::customer::CustomerRepositoryImpl;
use crate::test_helper::random;
use crate::unit_of_work::Executor;
use crate::utils::TryFromRow;

/// Users are provisioned outside this service, so tests insert them directly.
pub async fn create_test_user(
    executor: &Executor,
    username: &str,
) -> Result<UserModel, Box<dyn std::error::Error + Send + Sync>> {
    let query = sqlx::query(
        r#"
        INSERT INTO app_user (username, fullname, password)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(format!("Full {username}"))
    .bind("not-a-real-hash");

    let row = {
        let mut tx = executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.fetch_one(&mut **transaction).await?
    };

    UserModel::try_from_row(&row)
}

/// Details with a random phone and email so they never collide with existing rows.
pub fn create_test_details(fullname: &str) -> CustomerDetails {
    CustomerDetails {
        fullname: HeaplessString::try_from(fullname).unwrap(),
        company: HeaplessString::try_from("Acme").unwrap(),
        address: HeaplessString::try_from("1 Main St").unwrap(),
        phone: HeaplessString::try_from(format!("555{}", random(12)).as_str()).unwrap(),
        email: HeaplessString::try_from(format!("{}@example.com", random(12)).as_str()).unwrap(),
        birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        product: HeaplessString::try_from("Widget").unwrap(),
        note: HeaplessString::new(),
    }
}

pub async fn create_test_customer(
    repo: &CustomerRepositoryImpl,
    user_id: i64,
    fullname: &str,
) -> Result<CustomerModel, Box<dyn std::error::Error + Send + Sync>> {
    repo.create(NewCustomerModel {
        details: create_test_details(fullname),
        user_id,
    })
    .await
}
