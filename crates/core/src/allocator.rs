//! # Booking Allocator
//!
//! Turns a claim into a durable booking. The checks run as guard clauses in a
//! fixed order, which is also the precedence clients observe when a request is
//! wrong in several ways at once:
//!
//! 1. date format and calendar validity
//! 2. user id present
//! 3. user exists
//! 4. time is a business-hours slot
//! 5. atomic insert, where the store's `unique_slot` constraint settles races
//!
//! There is deliberately no "is the slot free?" read before the insert. Two
//! service instances could both see the slot as free; only the store's unique
//! constraint can pick a single winner.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::booking::NewBooking,
    store::{BookingStore, StoreError, UNIQUE_SLOT_CONSTRAINT, USER_REFERENCE_CONSTRAINT},
    validation::{is_valid_date, is_valid_time_slot},
};

/// Claims `time` on `date` for `user_id` and returns the new booking id
///
/// # Errors
///
/// * `BookingError::InvalidDate` - missing date, bad layout or non-existent day
/// * `BookingError::UserNotFound` - missing/empty id, unknown user, or the user
///   vanished before the insert committed
/// * `BookingError::ShopClosed` - missing time or not an on-the-hour business slot
/// * `BookingError::SlotFull` - another booking holds `(date, time)`
/// * `BookingError::Unexpected` - any other store failure
pub async fn create_booking(
    store: &dyn BookingStore,
    user_id: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> BookingResult<Uuid> {
    let date = match date {
        Some(date) if is_valid_date(date) => date,
        _ => return Err(BookingError::InvalidDate),
    };

    let user_id = match user_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(BookingError::UserNotFound),
    };

    if store.find_user(user_id).await?.is_none() {
        debug!("Booking rejected, user {} does not exist", user_id);
        return Err(BookingError::UserNotFound);
    }

    let time = match time {
        Some(time) if is_valid_time_slot(time) => time,
        _ => return Err(BookingError::ShopClosed),
    };

    let booking = NewBooking {
        user_id: user_id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    };

    match store.insert_booking(booking).await {
        Ok(id) => {
            debug!("Booked {} {} for {}: {}", date, time, user_id, id);
            Ok(id)
        }
        Err(StoreError::UniqueViolation { constraint }) if constraint == UNIQUE_SLOT_CONSTRAINT => {
            warn!("Slot {} {} already taken, claim by {} lost", date, time, user_id);
            Err(BookingError::SlotFull)
        }
        Err(StoreError::ForeignKeyViolation { constraint })
            if constraint == USER_REFERENCE_CONSTRAINT =>
        {
            warn!("User {} removed before booking {} {} committed", user_id, date, time);
            Err(BookingError::UserNotFound)
        }
        Err(err) => Err(err.into()),
    }
}
