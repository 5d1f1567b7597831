mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use axum::Router;
use car_care_subscriptions::domain::value_objects::document_id::DocumentId;
use common::{InMemoryStore, app, send};
use serde_json::{Value, json};
use uuid::Uuid;

fn customer_body() -> Value {
    json!({
        "name": "Aisha Rahman",
        "email": "aisha@example.com",
        "phone": "+974 5555 1234",
        "car_make": "Toyota",
        "car_model": "Land Cruiser",
        "car_year": 2022,
        "plate_number": "123456"
    })
}

async fn subscribe_to_basic(app: &Router) -> String {
    let (_, body) = send(app, "POST", "/api/customers", Some(customer_body())).await;
    let customer_id = body["id"].as_str().unwrap().to_string();
    send(app, "POST", "/api/seed", None).await;
    let (_, plans) = send(app, "GET", "/api/plans", None).await;
    let plan_id = plans
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["tier"] == "basic")
        .and_then(|p| p["id"].as_str())
        .unwrap()
        .to_string();

    let (_, body) = send(
        app,
        "POST",
        "/api/subscriptions",
        Some(json!({ "customer_id": customer_id, "plan_id": plan_id })),
    )
    .await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn customer_enrolls_subscribes_and_books_a_service() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));

    let (status, body) = send(&app, "POST", "/api/customers", Some(customer_body())).await;
    assert_eq!(status, 200);
    let customer_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "POST", "/api/seed", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["inserted"], 4);

    let (status, plans) = send(&app, "GET", "/api/plans", None).await;
    assert_eq!(status, 200);
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 4);
    let basic = plans.iter().find(|p| p["tier"] == "basic").unwrap();
    assert_eq!(basic["name"], "Essential Wash");
    assert_eq!(basic["price_qr"], 79.0);
    let plan_id = basic["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/subscriptions",
        Some(json!({ "customer_id": customer_id, "plan_id": plan_id })),
    )
    .await;
    assert_eq!(status, 200);
    let subscription_id = body["id"].as_str().unwrap().to_string();

    let (status, listed) = send(
        &app,
        "GET",
        &format!("/api/subscriptions?customer_id={customer_id}"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], subscription_id.as_str());
    assert_eq!(listed[0]["status"], "active");

    let stored = store.subscriptions();
    assert_eq!(stored[0].renews_at - stored[0].starts_at, Duration::days(30));

    let scheduled = (Utc::now() + Duration::days(7)).to_rfc3339();
    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings",
        Some(json!({
            "subscription_id": subscription_id,
            "service_type": "exterior wash",
            "scheduled_date": scheduled,
            "location": "West Bay, Doha"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert!(body["id"].is_string());

    let bookings = store.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, "scheduled");
    assert_eq!(bookings[0].notes, None);
}

#[tokio::test]
async fn booking_against_unknown_subscription_is_not_found() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));

    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings",
        Some(json!({
            "subscription_id": Uuid::new_v4().to_string(),
            "service_type": "interior detail",
            "scheduled_date": "2030-01-15T09:30:00",
            "location": "Lusail"
        })),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Subscription not found");
    assert!(store.bookings().is_empty());
}

#[tokio::test]
async fn subscription_with_unknown_references_is_not_found() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));

    let (_, body) = send(&app, "POST", "/api/customers", Some(customer_body())).await;
    let customer_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/subscriptions",
        Some(json!({ "customer_id": customer_id, "plan_id": "not-an-id" })),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], "Customer or Plan not found");
    assert!(store.subscriptions().is_empty());
}

#[tokio::test]
async fn seeding_twice_inserts_nothing_the_second_time() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));

    let (_, first) = send(&app, "POST", "/api/seed", None).await;
    let (status, second) = send(&app, "POST", "/api/seed", None).await;

    assert_eq!(first["inserted"], 4);
    assert_eq!(status, 200);
    assert_eq!(second["inserted"], 0);
    assert_eq!(store.plans().len(), 4);
}

#[tokio::test]
async fn invalid_customer_is_a_bad_request() {
    let app = app(Arc::new(InMemoryStore::default()));

    let mut body = customer_body();
    body["car_year"] = json!(1950);
    let (status, response) = send(&app, "POST", "/api/customers", Some(body)).await;
    assert_eq!(status, 400);
    assert_eq!(response["message"], "car_year must be between 1970 and 2100");

    let (status, response) =
        send(&app, "POST", "/api/customers", Some(json!({ "name": "Aisha" }))).await;
    assert_eq!(status, 400);
    assert_eq!(response["code"], 400);
}

#[tokio::test]
async fn listing_with_malformed_filter_is_empty() {
    let app = app(Arc::new(InMemoryStore::default()));

    let (status, body) = send(&app, "GET", "/api/subscriptions?customer_id=xyz", None).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn liveness_and_connectivity_report() {
    let app = app(Arc::new(InMemoryStore::default()));

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Jamie Andrew Car Services");
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/test", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["backend"], "Running");
    assert_eq!(body["database"], "Connected");
    assert_eq!(body["database_url"], "Set");
    assert_eq!(body["collections"].as_array().unwrap().len(), 4);

    let (status, _) = send(&app, "GET", "/api/unknown", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn each_customer_gets_a_fresh_identifier() {
    let app = app(Arc::new(InMemoryStore::default()));

    let (first_status, first) = send(&app, "POST", "/api/customers", Some(customer_body())).await;
    let (second_status, second) = send(&app, "POST", "/api/customers", Some(customer_body())).await;
    assert_eq!(first_status, 200);
    assert_eq!(second_status, 200);

    let first = DocumentId::parse(first["id"].as_str().unwrap()).unwrap();
    let second = DocumentId::parse(second["id"].as_str().unwrap()).unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn bare_date_and_space_separated_schedules_are_accepted() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));
    let subscription_id = subscribe_to_basic(&app).await;

    for scheduled_date in ["2030-01-15", "2030-01-15 09:30:00"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/bookings",
            Some(json!({
                "subscription_id": subscription_id,
                "service_type": "exterior wash",
                "scheduled_date": scheduled_date,
                "location": "Al Sadd"
            })),
        )
        .await;
        assert_eq!(status, 200, "{scheduled_date} rejected");
    }

    let bookings = store.bookings();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].scheduled_date.to_rfc3339(), "2030-01-15T00:00:00+00:00");
}

#[tokio::test]
async fn whitespace_only_fields_are_bad_requests() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(Arc::clone(&store));
    let subscription_id = subscribe_to_basic(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings",
        Some(json!({
            "subscription_id": subscription_id,
            "service_type": "   ",
            "scheduled_date": "2030-01-15T09:30:00Z",
            "location": "   "
        })),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "location must not be empty");
    assert!(store.bookings().is_empty());

    let mut blank_customer = customer_body();
    for field in ["name", "phone", "car_make", "car_model"] {
        blank_customer[field] = json!(" ");
    }
    let (status, _) = send(&app, "POST", "/api/customers", Some(blank_customer)).await;
    assert_eq!(status, 400);
}
