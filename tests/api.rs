use std::sync::Arc;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use chrono::{TimeZone, Utc};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde_json::{json, Value};
use geo_user_service::core::AppState;
use geo_user_service::domain::entities::users::{User, UserStatus};
use geo_user_service::repositories::users::{InMemoryUserRepository, UserStore};
use geo_user_service::routes::configure_all_routes;
use geo_user_service::services::auth::TokenService;

const SECRET: &str = "integration-secret";

fn tokens() -> TokenService {
    TokenService::new(SECRET, 1)
}

fn state(store: Arc<InMemoryUserRepository>) -> web::Data<AppState> {
    web::Data::new(AppState::new(store, tokens(), 4))
}

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(state($store.clone()))
                .configure(configure_all_routes),
        )
        .await
    };
}

fn registration(email: &str) -> Value {
    json!({
        "name": "Ann",
        "email": email,
        "password": "secret-pw",
        "address": "Jongno-gu, Seoul",
        "latitude": 37.5665,
        "longitude": 126.978
    })
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// 지정한 UTC 날짜에 가입한 사용자를 저장하고 토큰을 발급합니다.
async fn seed(store: &InMemoryUserRepository, name: &str, ymd: (i32, u32, u32)) -> (User, String) {
    let mut user = User::new(
        name.to_string(),
        format!("{}@example.com", name),
        "hash".to_string(),
        "addr".to_string(),
        37.5665,
        126.978,
    );
    let at = Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0).unwrap();
    user.register_at = DateTime::from_millis(at.timestamp_millis());

    let created = store.create(user).await.unwrap();
    let token = tokens().issue_token(&created).unwrap();
    (created, token)
}

#[actix_web::test]
async fn register_returns_public_fields_and_usable_token() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(registration("ann@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], "200");
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["name"], "Ann");
    assert_eq!(body["data"]["email"], "ann@example.com");
    assert_eq!(body["data"]["address"], "Jongno-gu, Seoul");
    assert_eq!(body["data"]["latitude"], 37.5665);
    assert_eq!(body["data"]["status"], "active");
    assert!(body["data"]["register_at"].is_string());
    assert!(body["data"].get("password").is_none());

    let saved = store.snapshot().pop().unwrap();
    assert_ne!(saved.password, "secret-pw");

    let token = body["data"]["token"].as_str().unwrap();
    let req = test::TestRequest::patch()
        .uri("/api/users/toggle-status")
        .insert_header(bearer(token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn register_duplicate_email_is_rejected_without_second_record() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(registration("dup@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::BAD_REQUEST {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "status_code": "400", "message": "Email already used" }));
        }
    }

    assert_eq!(store.len(), 1);
}

#[actix_web::test]
async fn register_missing_or_empty_field_is_rejected() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let mut missing = registration("ann@example.com");
    missing.as_object_mut().unwrap().remove("longitude");
    let mut empty = registration("ann@example.com");
    empty["name"] = json!("");

    for payload in [missing, empty] {
        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "All fields are required");
    }

    assert!(store.is_empty());
}

#[actix_web::test]
async fn register_accepts_zero_and_numeric_string_coordinates() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let mut payload = registration("zero@example.com");
    payload["latitude"] = json!(0);
    payload["longitude"] = json!("-0.1276");

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let saved = store.snapshot().pop().unwrap();
    assert_eq!(saved.latitude, 0.0);
    assert_eq!(saved.longitude, -0.1276);
}

#[actix_web::test]
async fn malformed_json_body_is_bad_request() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], "400");
    assert!(store.is_empty());
}

#[actix_web::test]
async fn protected_routes_reject_missing_and_invalid_tokens() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    seed(&store, "ann", (2024, 1, 10)).await;

    let cases = [
        (None, "Token missing"),
        (Some("Bearer ".to_string()), "Token missing"),
        (Some("Bearer not.a.jwt".to_string()), "Invalid token"),
        (Some(format!("Bearer {}", TokenService::new("other", 1).issue_token(&store.snapshot()[0]).unwrap())), "Invalid token"),
    ];

    for (authorization, message) in cases {
        let mut req = test::TestRequest::patch().uri("/api/users/toggle-status");
        if let Some(value) = authorization {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status_code": "401", "message": message }));
    }

    // 거부된 요청은 상태를 바꾸지 않음
    assert_eq!(store.snapshot()[0].status, UserStatus::Active);
}

#[actix_web::test]
async fn token_of_unknown_user_is_rejected() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let mut ghost = User::new(
        "Ghost".to_string(),
        "ghost@example.com".to_string(),
        "hash".to_string(),
        "nowhere".to_string(),
        0.0,
        0.0,
    );
    ghost.id = Some(ObjectId::new());
    let token = tokens().issue_token(&ghost).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/users/distance?destination_lat=1&destination_long=1")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn raw_token_without_bearer_prefix_is_accepted() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "ann", (2024, 1, 10)).await;

    let req = test::TestRequest::patch()
        .uri("/api/users/toggle-status")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn toggle_flips_every_user_and_twice_restores() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "ann", (2024, 1, 7)).await;
    seed(&store, "bob", (2024, 1, 8)).await;
    seed(&store, "cid", (2024, 1, 9)).await;

    let statuses = || store.snapshot().iter().map(|u| u.status).collect::<Vec<_>>();
    let before = statuses();

    let req = test::TestRequest::patch()
        .uri("/api/users/toggle-status")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status_code": "200", "message": "All users' status toggled" }));
    assert_eq!(statuses(), vec![UserStatus::Inactive; 3]);

    let req = test::TestRequest::patch()
        .uri("/api/users/toggle-status")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(statuses(), before);
}

#[actix_web::test]
async fn distance_uses_caller_stored_coordinates() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "ann", (2024, 1, 10)).await;

    // 서울 → 부산
    let req = test::TestRequest::get()
        .uri("/api/users/distance?destination_lat=35.1796&destination_long=129.0756")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], "200");
    assert_eq!(body["message"], "Distance calculated");
    let distance = body["distance"].as_f64().unwrap();
    assert!((320.0..330.0).contains(&distance), "distance = {}", distance);

    let req = test::TestRequest::get()
        .uri("/api/users/distance?destination_lat=37.5665&destination_long=126.978")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["distance"].as_f64().unwrap(), 0.0);
}

#[actix_web::test]
async fn distance_requires_both_destination_coordinates() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "ann", (2024, 1, 10)).await;

    for uri in [
        "/api/users/distance",
        "/api/users/distance?destination_lat=35.1",
        "/api/users/distance?destination_lat=&destination_long=129.0",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Destination coordinates required");
    }
}

#[actix_web::test]
async fn distance_with_non_numeric_destination_is_null() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "ann", (2024, 1, 10)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/distance?destination_lat=north&destination_long=129.0")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["distance"].is_null());
}

#[actix_web::test]
async fn listing_groups_users_by_registration_weekday() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "wed", (2024, 1, 10)).await;
    seed(&store, "sun", (2024, 1, 7)).await;
    seed(&store, "sat", (2024, 1, 13)).await;
    seed(&store, "sun2", (2024, 1, 14)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/listing?week_number=0,6")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let raw = test::read_body(resp).await;
    let text = std::str::from_utf8(&raw).unwrap();
    let sunday_at = text.find("\"sunday\"").unwrap();
    let saturday_at = text.find("\"saturday\"").unwrap();
    assert!(sunday_at < saturday_at);

    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body["status_code"], "200");
    assert_eq!(body["message"], "Users grouped by day");
    assert_eq!(
        body["data"],
        json!({
            "sunday": [
                { "name": "sun", "email": "sun@example.com" },
                { "name": "sun2", "email": "sun2@example.com" }
            ],
            "saturday": [
                { "name": "sat", "email": "sat@example.com" }
            ]
        })
    );
}

#[actix_web::test]
async fn listing_keeps_every_requested_key() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "wed", (2024, 1, 10)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/listing?week_number=1,9")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"], json!({ "monday": [], "9": [] }));
}

#[actix_web::test]
async fn listing_reads_leading_digits_of_week_numbers() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "mon", (2024, 1, 8)).await;
    let monday = json!([{ "name": "mon", "email": "mon@example.com" }]);

    let cases = [
        ("1.0", json!({ "monday": monday })),
        ("1abc", json!({ "monday": monday })),
        ("1,1.5", json!({ "monday": monday })),
        ("x", json!({ "x": [] })),
    ];

    for (week_number, expected) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/api/users/listing?week_number={}", week_number))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", week_number);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], expected, "week_number={}", week_number);
    }
}

#[actix_web::test]
async fn listing_requires_week_number() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);
    let (_, token) = seed(&store, "wed", (2024, 1, 10)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/listing")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status_code": "400", "message": "week_number required" }));
}

#[actix_web::test]
async fn public_status_routes_respond() {
    let store = Arc::new(InMemoryUserRepository::new());
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/").to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "API is running");

    let req = test::TestRequest::get().uri("/api/users/test").to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "Test route is working");

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "geo_user_service");
}
