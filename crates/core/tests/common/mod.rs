use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use slotbook_core::{
    models::{booking::NewBooking, user::User},
    store::{BookingStore, StoreError},
};
use uuid::Uuid;

mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError>;
        async fn insert_booking(&self, booking: NewBooking) -> Result<Uuid, StoreError>;
        async fn booked_times(&self, date: &str) -> Result<Vec<String>, StoreError>;
    }
}

#[allow(dead_code)]
pub fn alice() -> User {
    User {
        id: "user_alice".to_string(),
        name: "Alice".to_string(),
        created_at: Utc::now(),
    }
}
