//! # Slotbook Core
//!
//! Domain logic for the slot-reservation service: calendar and business-hours
//! validation, the availability read path and the booking allocator.
//!
//! The allocator never locks anything itself. Mutual exclusion between concurrent
//! claims for the same slot is delegated to the [`store::BookingStore`], whose insert
//! must enforce uniqueness of `(date, time)` atomically.

pub mod allocator;
pub mod availability;
pub mod errors;
pub mod models;
pub mod store;
pub mod validation;
