//! PostgreSQL implementation of the booking store contract.

use async_trait::async_trait;
use slotbook_core::{
    models::{booking::NewBooking, user::User},
    store::{BookingStore, StoreError},
};
use uuid::Uuid;

use crate::{DbPool, repositories};

#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Classifies a failed insert by the constraint Postgres reports, not by its message
pub fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().map(|s| s.to_string());
        match constraint {
            Some(constraint) if db_err.is_unique_violation() => {
                return StoreError::UniqueViolation { constraint };
            }
            Some(constraint) if db_err.is_foreign_key_violation() => {
                return StoreError::ForeignKeyViolation { constraint };
            }
            _ => {}
        }
    }
    StoreError::Other(eyre::Report::new(err))
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        let user = repositories::users::get_user_by_id(&self.pool, user_id).await?;
        Ok(user.map(User::from))
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Uuid, StoreError> {
        repositories::bookings::insert_booking(
            &self.pool,
            &booking.user_id,
            &booking.date,
            &booking.time,
        )
        .await
        .map_err(classify_insert_error)
    }

    async fn booked_times(&self, date: &str) -> Result<Vec<String>, StoreError> {
        Ok(repositories::bookings::get_booked_times_by_date(&self.pool, date).await?)
    }
}
