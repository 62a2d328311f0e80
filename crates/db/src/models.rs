use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slotbook_core::models::{booking::Booking, user::User};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            date: row.date,
            time: row.time,
            created_at: row.created_at,
        }
    }
}
