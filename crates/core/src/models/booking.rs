use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Canonical slot in `HH:00` form
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// A validated claim, ready to be handed to the store's atomic insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub user_id: String,
    pub date: String,
    pub time: String,
}

/// Body of `POST /bookings`
///
/// Every field is optional so that a missing field is reported with the same
/// precedence as an invalid one instead of as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub booking_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub available_times: Vec<String>,
}
