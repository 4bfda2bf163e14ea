//! API integration tests
//!
//! The router is driven in process against the in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use library_server::{
    api, config::DatabaseConfig, repository::MemoryRepository, services::Services, AppConfig,
    AppState, Converter,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_app() -> Router {
    let store = Arc::new(MemoryRepository::new());
    let state = AppState {
        config: Arc::new(AppConfig {
            database: DatabaseConfig {
                url: "memory:".to_string(),
                ..DatabaseConfig::default()
            },
            ..AppConfig::default()
        }),
        services: Arc::new(Services::new(store.clone(), store)),
        converter: Converter::new(),
    };
    api::router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    (status, value)
}

async fn create_tony(app: &Router) -> i64 {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/people",
        Some(json!({"name": "Tony", "age": 42, "email": "stark@avengers.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, people) = send_json(app, Method::GET, "/api/people", None).await;
    people
        .as_array()
        .and_then(|people| people.last())
        .and_then(|p| p["id"].as_i64())
        .expect("No person ID")
}

async fn create_book(app: &Router, person_id: i64, title: &str, year: i32) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        &format!("/api/people/{}/books", person_id),
        Some(json!({"title": title, "year": year})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_create_and_get_person() {
    let app = create_test_app();
    let id = create_tony(&app).await;

    let (status, body) = send_json(&app, Method::GET, &format!("/api/people/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "name": "Tony", "age": 42, "email": "stark@avengers.com"})
    );
}

#[tokio::test]
async fn test_create_person_reports_every_violation() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people",
        Some(json!({"name": "", "age": -1, "email": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "name - Name should not be empty; age - Age should be greater than 0; email - Email should be valid"
    );
    assert!(body["timestamp"].is_i64());

    let (_, people) = send_json(&app, Method::GET, "/api/people", None).await;
    assert_eq!(people, json!([]));
}

#[tokio::test]
async fn test_update_person_with_invalid_fields() {
    let app = create_test_app();
    let id = create_tony(&app).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/people",
        Some(json!({"id": id, "name": "", "age": 5, "email": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Name should not be empty"));
    assert!(message.contains("Email should be valid"));
}

#[tokio::test]
async fn test_update_person_keeps_id() {
    let app = create_test_app();
    let id = create_tony(&app).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/people",
        Some(json!({"id": id, "name": "Anthony", "age": 43, "email": "tony@stark.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(&app, Method::GET, &format!("/api/people/{}", id), None).await;
    assert_eq!(
        body,
        json!({"id": id, "name": "Anthony", "age": 43, "email": "tony@stark.com"})
    );
}

#[tokio::test]
async fn test_unknown_person_is_not_found() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/people/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Person with id = 42 wasn't found!");

    let (status, _) = send_json(&app, Method::DELETE, "/api/people/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::GET, "/api/people/42/books", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::DELETE, "/api/people/42/books", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_book_has_no_owner_field() {
    let app = create_test_app();
    let id = create_tony(&app).await;

    let book = create_book(&app, id, "Iron", 2008).await;

    assert_eq!(book["title"], "Iron");
    assert_eq!(book["year"], 2008);
    assert!(book.get("owner").is_none());

    let book_id = book["id"].as_i64().expect("No book ID");
    let (status, body) = send_json(&app, Method::GET, &format!("/api/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": book_id, "title": "Iron", "year": 2008}));
}

#[tokio::test]
async fn test_create_book_for_unknown_person_fails() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people/42/books",
        Some(json!({"title": "Iron", "year": 2008})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book isn't created!");
}

#[tokio::test]
async fn test_list_person_books() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    create_book(&app, id, "Iron", 2008).await;
    create_book(&app, id, "Iron 2", 2010).await;

    let (status, body) = send_json(&app, Method::GET, &format!("/api/people/{}/books", id), None).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Iron", "Iron 2"]);
}

#[tokio::test]
async fn test_books_range() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    create_book(&app, id, "Iron", 2008).await;
    create_book(&app, id, "Endgame", 2019).await;

    let (status, body) = send_json(&app, Method::GET, "/api/books_range?from=2000&to=2010", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Iron");
}

#[tokio::test]
async fn test_empty_books_range_is_not_found() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/books_range?from=2000&to=2010", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Books aren't found");
}

#[tokio::test]
async fn test_books_range_requires_bounds() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/books_range?from=2000", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_book_changes_title_only() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    let book = create_book(&app, id, "Iron", 2008).await;
    let book_id = book["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/books/{}", book_id),
        Some(json!({"title": "Iron Man", "year": 1963})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": book_id, "title": "Iron Man", "year": 2008}));
}

#[tokio::test]
async fn test_update_unknown_book_is_not_found() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/books/5",
        Some(json!({"title": "Iron Man", "year": 1963})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with id = 5 isn't found");
}

#[tokio::test]
async fn test_delete_book() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    let book_id = create_book(&app, id, "Iron", 2008).await["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_books_of_person() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    create_book(&app, id, "Iron", 2008).await;
    create_book(&app, id, "Iron 2", 2010).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/people/{}/books", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send_json(&app, Method::GET, &format!("/api/people/{}/books", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_person_cascades_to_books() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    let book_id = create_book(&app, id, "Iron", 2008).await["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/people/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Person was removed");

    let (status, _) = send(&app, Method::GET, &format!("/api/people/{}/books", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &format!("/api/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_requests_use_error_payload() {
    let app = create_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/people/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_i64());

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people",
        Some(json!({"name": "Tony", "age": "old", "email": "stark@avengers.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_missing_person_fields_are_validation_failures() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people",
        Some(json!({"age": -1, "email": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "name - Name should not be empty; age - Age should be greater than 0; email - Email should be valid"
    );
}

#[tokio::test]
async fn test_null_person_fields_are_validation_failures() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people",
        Some(json!({"name": null, "age": 3, "email": null})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "name - Name should not be empty; email - Email should not be empty"
    );
}

#[tokio::test]
async fn test_invalid_book_for_unknown_person_is_not_created() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/people/999/books",
        Some(json!({"title": "", "year": 2008})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book isn't created!");
}

#[tokio::test]
async fn test_invalid_update_of_unknown_book_is_not_found() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/books/5",
        Some(json!({"title": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with id = 5 isn't found");
}

#[tokio::test]
async fn test_update_book_without_year() {
    let app = create_test_app();
    let id = create_tony(&app).await;
    let book_id = create_book(&app, id, "Iron", 2008).await["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/books/{}", book_id),
        Some(json!({"title": "Iron Man"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": book_id, "title": "Iron Man", "year": 2008}));

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/books/{}", book_id),
        Some(json!({"title": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "title - Title should not be empty");
}
