pub mod memory;
pub mod mock;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod store;

pub use memory::MemoryBookingStore;
pub use store::PgBookingStore;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
