//! # Store Contract
//!
//! The allocator and the availability reader only talk to storage through
//! [`BookingStore`]. Implementations must make `insert_booking` a single atomic
//! operation that rejects a second row for the same `(date, time)` and a row whose
//! user does not exist at commit time, reporting each with a distinguishable
//! [`StoreError`] variant.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{booking::NewBooking, user::User};

/// Name of the unique constraint over `bookings(date, time)`
pub const UNIQUE_SLOT_CONSTRAINT: &str = "unique_slot";

/// Name of the foreign key from `bookings.user_id` to `users.id`
pub const USER_REFERENCE_CONSTRAINT: &str = "bookings_user_id_fkey";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unique constraint violation: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Foreign key constraint violation: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error(transparent)]
    Other(#[from] eyre::Report),
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Primary key lookup in `users`
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError>;

    /// Inserts one booking row and returns its generated id
    async fn insert_booking(&self, booking: NewBooking) -> Result<Uuid, StoreError>;

    /// All `time` values booked on `date`, in no particular order
    async fn booked_times(&self, date: &str) -> Result<Vec<String>, StoreError>;
}
