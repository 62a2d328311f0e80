use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by id: {}", id);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a user, or renames it when the id already exists
pub async fn upsert_user(pool: &Pool<Postgres>, id: &str, name: &str) -> Result<DbUser> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    tracing::debug!("User upserted: id={}, name={}", user.id, user.name);
    Ok(user)
}

pub async fn delete_user(pool: &Pool<Postgres>, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Removes every user; their bookings go with them through the cascading key
pub async fn delete_all_users(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM users").execute(pool).await?;
    Ok(result.rows_affected())
}
