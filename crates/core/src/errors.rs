use thiserror::Error;

use crate::store::StoreError;

/// Everything a slot query or a booking claim can fail with
///
/// The display strings of the validation variants are the messages clients see.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid date format")]
    InvalidDate,

    #[error("User not found")]
    UserNotFound,

    #[error("Shop closed")]
    ShopClosed,

    #[error("Slot full")]
    SlotFull,

    #[error("Invalid request body")]
    MalformedRequest,

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

impl BookingError {
    /// True for outcomes caused by the request itself rather than by a fault
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BookingError::Unexpected(_))
    }
}

/// Store failures that the caller has not classified are faults
impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Other(report) => BookingError::Unexpected(report),
            violation => BookingError::Unexpected(eyre::Report::new(violation)),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
