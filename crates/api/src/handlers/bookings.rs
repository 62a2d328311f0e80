//! # Booking Handlers
//!
//! `POST /bookings` decodes the claim and hands it to the allocator. Which of two
//! simultaneous claims for one slot wins is decided by the store, so nothing here
//! serializes requests.

use axum::{Json, body::Bytes, extract::State};
use slotbook_core::{
    allocator,
    errors::BookingError,
    models::booking::{CreateBookingRequest, CreateBookingResponse},
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Claims a slot for a user
///
/// # Endpoint
///
/// ```text
/// POST /bookings
/// {"user_id": "user_alice", "date": "2024-06-10", "time": "09:00"}
/// ```
///
/// # Errors
///
/// All with status 400, checked in this order:
///
/// * `Invalid request body` - body is not a JSON object of string fields
/// * `Invalid date format` - missing, malformed or non-existent date
/// * `User not found` - missing, empty or unknown user id
/// * `Shop closed` - time is not an on-the-hour slot between 09:00 and 16:00
/// * `Slot full` - the slot is already booked
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<CreateBookingResponse>, AppError> {
    // Decoded regardless of Content-Type
    let request: CreateBookingRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected booking body: {}", e);
        AppError(BookingError::MalformedRequest)
    })?;

    let booking_id = allocator::create_booking(
        state.store.as_ref(),
        request.user_id.as_deref(),
        request.date.as_deref(),
        request.time.as_deref(),
    )
    .await?;

    info!("Booking {} created", booking_id);
    Ok(Json(CreateBookingResponse { booking_id }))
}
