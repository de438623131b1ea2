use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::{build_router, AppState};
use crate::infrastructure::memory::InMemoryLocationRepository;

fn test_app() -> Router {
    let repo = Arc::new(InMemoryLocationRepository::with_samples());
    build_router(Arc::new(AppState::new(repo)))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_fresh_process_lists_three_seeds() {
    let app = test_app();

    let response = send(&app, get("/api/locations")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    let ids: Vec<i64> = items.iter().map(|l| l["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(
        items[0],
        json!({
            "id": 1,
            "title": "Seoul Tower",
            "latitude": 37.5512,
            "longitude": 126.9882,
            "description": "Famous landmark in Seoul"
        })
    );
}

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let app = test_app();

    let response = send(
        &app,
        post_json(
            "/api/locations",
            r#"{"title":"Test","latitude":1.0,"longitude":2.0,"description":"d"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"id": 4, "title": "Test", "latitude": 1.0, "longitude": 2.0, "description": "d"})
    );

    let response = send(&app, get("/api/locations/4")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Test");
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = test_app();

    let response = send(
        &app,
        post_json(
            "/api/locations",
            r#"{"id":1,"title":"Dup","latitude":0.5,"longitude":0.5,"description":""}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 4);

    let response = send(&app, get("/api/locations/1")).await;
    assert_eq!(body_json(response).await["title"], "Seoul Tower");
}

#[tokio::test]
async fn test_create_accepts_null_coordinates() {
    let app = test_app();

    let response = send(
        &app,
        post_json(
            "/api/locations",
            r#"{"title":"x","latitude":null,"longitude":null,"description":"d"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"id": 4, "title": "x", "latitude": 0.0, "longitude": 0.0, "description": "d"})
    );
}

#[tokio::test]
async fn test_get_unknown_id_is_404_with_empty_body() {
    let app = test_app();

    let response = send(&app, get("/api/locations/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = test_app();

    let response = send(&app, delete("/api/locations/1")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, get("/api/locations/1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, delete("/api/locations/1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    let body = body_json(send(&app, get("/api/locations")).await).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = test_app();
    let body = r#"{"title":"X","latitude":0.0,"longitude":0.0,"description":""}"#;

    let created = body_json(send(&app, post_json("/api/locations", body)).await).await;
    assert_eq!(created["id"], 4);

    send(&app, delete("/api/locations/4")).await;

    let created = body_json(send(&app, post_json("/api/locations", body)).await).await;
    assert_eq!(created["id"], 5);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let app = test_app();

    let response = send(&app, post_json("/api/locations", "{not json")).await;
    assert!(response.status().is_client_error());

    let body = body_json(send(&app, get("/api/locations")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = test_app();

    let response = send(&app, get("/api/locations/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = test_app();

    let request = Request::builder()
        .uri("/api/locations")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api/locations/1")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, preflight).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_ping_reports_live_count() {
    let app = test_app();

    send(&app, delete("/api/locations/3")).await;

    let response = send(&app, get("/api/ping")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["locations"], 2);
}
