use crate::models::DbBooking;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a booking in one statement and returns its id
///
/// Conflicts are left to the `unique_slot` and `bookings_user_id_fkey`
/// constraints, so the raw `sqlx::Error` is returned for the caller to classify.
pub async fn insert_booking(
    pool: &Pool<Postgres>,
    user_id: &str,
    date: &str,
    time: &str,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO bookings (id, user_id, date, time, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(date)
    .bind(time)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_booked_times_by_date(pool: &Pool<Postgres>, date: &str) -> Result<Vec<String>> {
    let times = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time
        FROM bookings
        WHERE date = $1
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    tracing::debug!("{} booking(s) found for {}", times.len(), date);
    Ok(times)
}

pub async fn get_bookings_by_date(pool: &Pool<Postgres>, date: &str) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, user_id, date, time, created_at
        FROM bookings
        WHERE date = $1
        ORDER BY time ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn delete_all_bookings(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM bookings").execute(pool).await?;
    Ok(result.rows_affected())
}
