use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::{models::DbUser, repositories};

/// Demo accounts created by `db-seed`
pub const SEED_USERS: [(&str, &str); 4] = [
    ("user_alice", "Alice"),
    ("user_bob", "Bob"),
    ("user_charlie", "Charlie"),
    ("user_dave", "Dave"),
];

/// Wipes bookings and users, then inserts [`SEED_USERS`]
pub async fn seed_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    info!("Clearing existing data...");
    repositories::bookings::delete_all_bookings(pool).await?;
    repositories::users::delete_all_users(pool).await?;

    info!("Seeding users...");
    let mut users = Vec::with_capacity(SEED_USERS.len());
    for (id, name) in SEED_USERS {
        users.push(repositories::users::upsert_user(pool, id, name).await?);
    }

    info!("Seeded {} users", users.len());
    Ok(users)
}
