//! HTTP 路由
//!
//! `POST /api/summarise` 和 `GET /health`

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::PipelineError;
use crate::models::{ErrorResponse, SummariseRequest, SummariseResponse};
use crate::workflow::SummariseFlow;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<SummariseFlow>,
}

impl AppState {
    pub fn new(flow: SummariseFlow) -> Self {
        Self {
            flow: Arc::new(flow),
        }
    }
}

/// 构建路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/summarise", post(summarise_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn summarise_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummariseRequest>, JsonRejection>,
) -> Result<Json<SummariseResponse>, PipelineError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("请求体解析失败: {}", rejection);
        PipelineError::InvalidInput(rejection.body_text())
    })?;

    let record = state.flow.run(&request.url).await?;
    Ok(Json(SummariseResponse::from(&record)))
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 处理过程中 panic 时返回通用的 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("❌ 请求处理 panic: {}", detail);
    PipelineError::Internal(detail.to_string()).into_response()
}
