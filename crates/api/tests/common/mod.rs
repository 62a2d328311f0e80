use std::sync::Arc;

use axum_test::TestServer;
use slotbook_api::{ApiState, build_router};
use slotbook_core::store::BookingStore;
use slotbook_db::{MemoryBookingStore, seed::SEED_USERS};

pub struct TestContext {
    #[allow(dead_code)]
    pub store: Arc<MemoryBookingStore>,
    pub server: TestServer,
}

impl TestContext {
    /// Router backed by an in-memory store holding the demo users
    pub fn new() -> Self {
        let store = Arc::new(MemoryBookingStore::new());
        for (id, name) in SEED_USERS {
            store.add_user(id, name);
        }
        let server = server_for(store.clone());
        Self { store, server }
    }
}

#[allow(dead_code)]
pub fn server_for(store: Arc<dyn BookingStore>) -> TestServer {
    let state = Arc::new(ApiState { store });
    TestServer::new(build_router(state)).expect("Failed to start test server")
}
