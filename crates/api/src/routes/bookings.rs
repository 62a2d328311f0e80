use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/bookings", post(handlers::bookings::create_booking))
}
