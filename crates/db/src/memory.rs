//! In-memory implementation of the booking store contract.
//!
//! Mirrors the Postgres schema's guarantees: every insert runs inside one
//! critical section, which plays the part of the database engine and enforces
//! `unique_slot` and the cascading user reference atomically. Used by tests.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use chrono::Utc;
use slotbook_core::{
    models::{
        booking::{Booking, NewBooking},
        user::User,
    },
    store::{BookingStore, StoreError, UNIQUE_SLOT_CONSTRAINT, USER_REFERENCE_CONSTRAINT},
};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    /// Keyed by `(date, time)`
    bookings: BTreeMap<(String, String), Booking>,
}

#[derive(Default)]
pub struct MemoryBookingStore {
    tables: Mutex<Tables>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_user(&self, id: &str, name: &str) -> User {
        let user = User {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.tables().users.insert(user.id.clone(), user.clone());
        user
    }

    /// Removes a user together with its bookings
    pub fn remove_user(&self, id: &str) -> bool {
        let mut tables = self.tables();
        let removed = tables.users.remove(id).is_some();
        tables.bookings.retain(|_, booking| booking.user_id != id);
        removed
    }

    /// Snapshot of every booking, ordered by date then time
    pub fn bookings(&self) -> Vec<Booking> {
        self.tables().bookings.values().cloned().collect()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.tables().users.get(user_id).cloned())
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Uuid, StoreError> {
        let mut tables = self.tables();

        let key = (booking.date, booking.time);
        if tables.bookings.contains_key(&key) {
            return Err(StoreError::UniqueViolation {
                constraint: UNIQUE_SLOT_CONSTRAINT.to_string(),
            });
        }
        if !tables.users.contains_key(&booking.user_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: USER_REFERENCE_CONSTRAINT.to_string(),
            });
        }

        let id = Uuid::new_v4();
        let row = Booking {
            id,
            user_id: booking.user_id,
            date: key.0.clone(),
            time: key.1.clone(),
            created_at: Utc::now(),
        };
        tables.bookings.insert(key, row);
        Ok(id)
    }

    async fn booked_times(&self, date: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .tables()
            .bookings
            .values()
            .filter(|booking| booking.date == date)
            .map(|booking| booking.time.clone())
            .collect())
    }
}
