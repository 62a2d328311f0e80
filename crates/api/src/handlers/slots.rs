//! # Slot Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use slotbook_core::{
    availability,
    errors::BookingError,
    models::booking::{AvailableSlotsResponse, SlotsQuery},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists the open slots of a day
///
/// # Endpoint
///
/// ```text
/// GET /slots?date=2024-06-10
/// ```
///
/// # Errors
///
/// * `400 {"error": "Invalid date format"}` - missing, malformed or non-existent date
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<SlotsQuery>, QueryRejection>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let date = match query {
        Ok(Query(SlotsQuery { date: Some(date) })) => date,
        _ => return Err(AppError(BookingError::InvalidDate)),
    };

    let available_times = availability::get_available_slots(state.store.as_ref(), &date).await?;

    Ok(Json(AvailableSlotsResponse { available_times }))
}
