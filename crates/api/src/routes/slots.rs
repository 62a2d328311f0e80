use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/slots", get(handlers::slots::get_available_slots))
}
