use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use starpool_server::{app_router, build_state, AppState, Config};
use tower::ServiceExt;

fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    }
}

async fn test_router() -> (Router, Arc<AppState>, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir);
    let state = build_state(&config).expect("state");
    (app_router(state.clone(), &config), state, dir)
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_goal(router: &Router) -> i64 {
    let (status, body) = send(
        router,
        "POST",
        "/goals",
        Some(json!({"title": "Learn Go", "description": "", "category": "skill", "stars": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("goal id")
}

#[tokio::test]
async fn goal_crud_roundtrip() {
    let (router, _state, _dir) = test_router().await;
    let id = create_goal(&router).await;

    let (status, body) = send(&router, "GET", &format!("/goals/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Learn Go");
    assert_eq!(body["category"], "skill");

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/goals/{}", id),
        Some(json!({"title": "Learn Rust", "description": "x", "category": "skill", "stars": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Learn Rust");

    let (status, body) = send(&router, "GET", "/goals/category/skill", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&router, "GET", "/goals/category/none", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = send(&router, "DELETE", &format!("/goals/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&router, "GET", &format!("/goals/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_missing_goal_is_404() {
    let (router, _state, _dir) = test_router().await;
    let (status, body) = send(&router, "DELETE", "/goals/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn daily_rating_upserts_and_recomputes_total() {
    let (router, _state, _dir) = test_router().await;
    let id = create_goal(&router).await;
    let rate = |rating: i32, date: &str| {
        let uri = format!("/goals/{}/daily-rating", id);
        let body = json!({"rating": rating, "date": date});
        let router = router.clone();
        async move { send(&router, "POST", &uri, Some(body)).await }
    };

    let (status, body) = rate(4, "2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, goal) = send(&router, "GET", &format!("/goals/{}", id), None).await;
    assert_eq!(goal["stars"], 4);

    // same date overwrites: total becomes 2, not 6
    let (status, _) = rate(2, "2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    let (_, goal) = send(&router, "GET", &format!("/goals/{}", id), None).await;
    assert_eq!(goal["stars"], 2);

    let (status, _) = rate(5, "2024-01-02").await;
    assert_eq!(status, StatusCode::OK);
    let (_, goal) = send(&router, "GET", &format!("/goals/{}", id), None).await;
    assert_eq!(goal["stars"], 7);

    let (status, body) = send(&router, "GET", &format!("/goals/{}/daily-ratings", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let ratings = body.as_array().unwrap();
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0]["date"], "2024-01-02");

    let (status, body) = send(&router, "GET", "/stars", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_stars"], 7);
}

#[tokio::test]
async fn rating_boundaries_are_enforced() {
    let (router, _state, _dir) = test_router().await;
    let id = create_goal(&router).await;
    let uri = format!("/goals/{}/daily-rating", id);

    for (rating, expected) in [
        (0, StatusCode::BAD_REQUEST),
        (6, StatusCode::BAD_REQUEST),
        (1, StatusCode::OK),
        (5, StatusCode::OK),
    ] {
        let (status, _) = send(
            &router,
            "POST",
            &uri,
            Some(json!({"rating": rating, "date": "2024-02-01"})),
        )
        .await;
        assert_eq!(status, expected, "rating {}", rating);
    }

    let (status, body) = send(
        &router,
        "POST",
        "/goals/999/daily-rating",
        Some(json!({"rating": 3, "date": "2024-02-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn comment_thread_scenario() {
    let (router, _state, _dir) = test_router().await;
    let id = create_goal(&router).await;
    let uri = format!("/goals/{}/comments", id);

    let (status, root) = send(&router, "POST", &uri, Some(json!({"content": "root"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(root["parent_id"].is_null());
    let root_id = root["id"].as_i64().unwrap();

    let (status, reply) = send(
        &router,
        "POST",
        &uri,
        Some(json!({"content": "reply", "parent_id": root_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reply["parent_id"], root_id);

    let (status, body) = send(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"].as_i64().unwrap(), root_id);
    let children = comments[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], reply["id"]);
    assert!(children[0]["children"].as_array().unwrap().is_empty());

    // reply to a parent that does not exist
    let (status, _) = send(
        &router,
        "POST",
        &uri,
        Some(json!({"content": "dangling", "parent_id": 9999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // comments on a missing goal
    let (status, _) = send(&router, "GET", "/goals/777/comments", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let (router, _state, _dir) = test_router().await;
    let id = create_goal(&router).await;

    // missing required field
    let (status, body) = send(&router, "POST", "/goals", Some(json!({"description": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // mistyped field
    let (status, body) = send(
        &router,
        "POST",
        &format!("/goals/{}/daily-rating", id),
        Some(json!({"rating": "high", "date": "2024-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // body that is not JSON at all
    let request = Request::builder()
        .method("POST")
        .uri(format!("/goals/{}/comments", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn healthz_responds() {
    let (router, _state, _dir) = test_router().await;
    let request = Request::builder()
        .method("GET")
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
