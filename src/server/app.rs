use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Router,
};
use prometheus::{Encoder, TextEncoder};
use routes::{category_router, questions_router, quizzes_router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::telemetry::Metrics;

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
    metrics: Metrics,
}

pub fn build_router(pool: SqlitePool, metrics: Metrics) -> Router {
    let state = AppState { pool, metrics };

    Router::new()
        .route("/metrics", get(export_metrics))
        .merge(category_router())
        .merge(questions_router())
        .merge(quizzes_router())
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .fallback(|| async {
            tracing::info!("Fallback");
            ApiError::NotFound
        })
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool, metrics: Metrics, addr: &str) -> anyhow::Result<()> {
    let app = build_router(pool, metrics);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn export_metrics(State(metrics): State<Metrics>) -> Response {
    let encoder = TextEncoder::new();
    let mut buf = vec![];
    if let Err(error) = encoder.encode(&metrics.gather(), &mut buf) {
        tracing::error!("Failed to encode metrics: {error}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
        buf,
    )
        .into_response()
}
