use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::ApiState;

/// Liveness probe; never touches the store
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/health", get(health))
}
