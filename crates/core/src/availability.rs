//! # Availability Reader
//!
//! Derives the open slots of a day as the complement of the booked ones.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    errors::{BookingError, BookingResult},
    store::BookingStore,
    validation::{generate_all_slots, is_valid_date},
};

/// Returns the slots of `date` nobody has claimed yet, in ascending order
///
/// The date is validated before the store is touched. The result reflects
/// committed bookings only; a slot listed here can still be lost to a concurrent
/// claim, which the allocator reports as [`BookingError::SlotFull`].
pub async fn get_available_slots(
    store: &dyn BookingStore,
    date: &str,
) -> BookingResult<Vec<String>> {
    if !is_valid_date(date) {
        return Err(BookingError::InvalidDate);
    }

    let booked: HashSet<String> = store.booked_times(date).await?.into_iter().collect();
    debug!("{} slot(s) booked on {}", booked.len(), date);

    Ok(generate_all_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect())
}
