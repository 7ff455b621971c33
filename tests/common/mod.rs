#![allow(dead_code)]

use std::str::FromStr;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_api::db::queries::categories::import_categories;
use trivia_api::db::queries::questions::import_questions;
use trivia_api::db::{self, Category, Question};
use trivia_api::server::app::build_router;
use trivia_api::telemetry::Metrics;

pub const TOTAL_QUESTIONS: i64 = 23;
pub const IBM_QUESTION_ID: i64 = 23;

/// A fresh in-memory database with the schema applied and no rows.
pub async fn empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    // the in-memory database is dropped with its last connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

/// Categories 1 (Science), 2 (Art), 3 (Geography, no questions).
/// Questions 1..=15 and 23 belong to Science, 16..=22 to Art.
pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    let categories = vec![
        category(1, "Science"),
        category(2, "Art"),
        category(3, "Geography"),
    ];
    import_categories(&pool, categories).await.unwrap();

    let mut questions: Vec<Question> = (1..=15)
        .map(|id| question(id, &format!("Science question {id}"), 1))
        .chain((16..=22).map(|id| question(id, &format!("Art question {id}"), 2)))
        .collect();
    questions.push(question(
        IBM_QUESTION_ID,
        "What field IBM Watson supports?",
        1,
    ));
    import_questions(&pool, questions).await.unwrap();
    pool
}

pub fn category(id: i64, kind: &str) -> Category {
    Category {
        id,
        kind: kind.to_owned(),
    }
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_owned(),
        answer: format!("Answer {id}"),
        category,
        difficulty: id % 5 + 1,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn app(pool: &SqlitePool) -> Router {
    build_router(pool.clone(), Metrics::new().unwrap())
}

pub async fn send(pool: &SqlitePool, request: Request<Body>) -> (StatusCode, Value) {
    send_to(app(pool), request).await
}

pub async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
