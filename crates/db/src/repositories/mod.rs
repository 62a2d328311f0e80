pub mod bookings;
pub mod users;
