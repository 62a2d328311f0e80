mod common;

use std::future::IntoFuture;

use axum::{body::Bytes, http::StatusCode};
use common::TestContext;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

fn booking_id(body: &Value) -> Uuid {
    body["booking_id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("response should carry a booking id")
}

#[tokio::test]
async fn test_booked_slot_disappears_from_listing() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "user_alice", "date": "2024-06-10", "time": "09:00" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let id = booking_id(&response.json::<Value>());

    let response = ctx.server.get("/slots").add_query_param("date", "2024-06-10").await;
    assert_eq!(
        response.json::<Value>(),
        json!({
            "available_times": ["10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
        })
    );

    let bookings = ctx.store.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, id);
    assert_eq!(bookings[0].user_id, "user_alice");
}

#[tokio::test]
async fn test_simultaneous_claims_for_one_slot() {
    let ctx = TestContext::new();

    let alice = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "user_alice", "date": "2024-06-10", "time": "09:00" }))
        .into_future();
    let bob = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "user_bob", "date": "2024-06-10", "time": "09:00" }))
        .into_future();
    let (alice, bob) = tokio::join!(alice, bob);

    let mut statuses = vec![alice.status_code(), bob.status_code()];
    statuses.sort_by_key(|status| status.as_u16());
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);

    let loser = if alice.status_code() == StatusCode::OK { bob } else { alice };
    assert_eq!(loser.json::<Value>(), json!({ "error": "Slot full" }));
    assert_eq!(ctx.store.bookings().len(), 1);
}

#[tokio::test]
async fn test_unknown_user() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "ghost", "date": "2024-06-10", "time": "09:00" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": "User not found" }));
    assert!(ctx.store.bookings().is_empty());
}

#[rstest]
// Date problems beat everything else
#[case(json!({ "user_id": "ghost", "date": "2024-02-30", "time": "20:00" }), "Invalid date format")]
#[case(json!({ "user_id": "user_alice", "time": "09:00" }), "Invalid date format")]
// Then the user
#[case(json!({ "date": "2024-06-10", "time": "09:00" }), "User not found")]
#[case(json!({ "user_id": "", "date": "2024-06-10", "time": "09:00" }), "User not found")]
#[case(json!({ "user_id": "ghost", "date": "2024-06-10", "time": "20:00" }), "User not found")]
// Then business hours
#[case(json!({ "user_id": "user_alice", "date": "2024-06-10", "time": "17:00" }), "Shop closed")]
#[case(json!({ "user_id": "user_alice", "date": "2024-06-10", "time": "09:30" }), "Shop closed")]
#[case(json!({ "user_id": "user_alice", "date": "2024-06-10" }), "Shop closed")]
// Bodies that do not decode at all
#[case(json!({ "user_id": 42, "date": "2024-06-10", "time": "09:00" }), "Invalid request body")]
#[case(json!("user_alice 2024-06-10 09:00"), "Invalid request body")]
#[tokio::test]
async fn test_rejections_follow_precedence(#[case] body: Value, #[case] expected: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.post("/bookings").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": expected }));
    assert!(ctx.store.bookings().is_empty());
}

#[tokio::test]
async fn test_body_that_is_not_json() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/bookings").text("{not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid request body" })
    );
}

#[tokio::test]
async fn test_json_body_without_content_type_is_accepted() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/bookings")
        .bytes(Bytes::from_static(
            br#"{"user_id":"user_alice","date":"2024-06-10","time":"09:00"}"#,
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    booking_id(&response.json::<Value>());
    assert_eq!(ctx.store.bookings().len(), 1);
}

#[tokio::test]
async fn test_second_claim_on_full_slot_and_other_slots_stay_open() {
    let ctx = TestContext::new();
    let claim = |user: &str, time: &str| {
        json!({ "user_id": user, "date": "2024-06-10", "time": time })
    };

    let first = ctx.server.post("/bookings").json(&claim("user_alice", "11:00")).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = ctx.server.post("/bookings").json(&claim("user_bob", "11:00")).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(second.json::<Value>(), json!({ "error": "Slot full" }));

    let third = ctx.server.post("/bookings").json(&claim("user_bob", "12:00")).await;
    assert_eq!(third.status_code(), StatusCode::OK);

    // Same slot on another day is independent
    let other_day = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "user_charlie", "date": "2024-06-11", "time": "11:00" }))
        .await;
    assert_eq!(other_day.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_removed_user_cannot_book() {
    let ctx = TestContext::new();
    ctx.store.remove_user("user_dave");

    let response = ctx
        .server
        .post("/bookings")
        .json(&json!({ "user_id": "user_dave", "date": "2024-06-10", "time": "09:00" }))
        .await;

    assert_eq!(response.json::<Value>(), json!({ "error": "User not found" }));
}
