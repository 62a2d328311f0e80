//! # Error Handling Middleware
//!
//! Maps [`BookingError`] to HTTP responses. Every outcome caused by the request
//! itself is a `400` whose JSON body carries the error message. Faults are logged
//! with their full report and answered with a generic `500`.

use axum::{
    BoxError, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::timeout::error::Elapsed;
use serde_json::json;
use slotbook_core::errors::BookingError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::{errors::BookingError, validation::is_valid_date};
///
/// async fn handler(date: String) -> Result<Json<String>, AppError> {
///     if !is_valid_date(&date) {
///         return Err(AppError(BookingError::InvalidDate));
///     }
///     Ok(Json(date))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BookingError::InvalidDate
            | BookingError::UserNotFound
            | BookingError::ShopClosed
            | BookingError::SlotFull
            | BookingError::MalformedRequest => (StatusCode::BAD_REQUEST, self.0.to_string()),
            BookingError::Unexpected(report) => {
                error!("Request failed: {:?}", report);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows using `?` on `BookingResult` inside handlers
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}

/// Turns errors raised by service layers into the same JSON error shape
pub async fn handle_layer_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
            .into_response();
    }
    map_error(BookingError::Unexpected(eyre::eyre!("{}", err)))
}
