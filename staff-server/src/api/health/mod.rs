//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活检查，附带职位数量 |
//!
//! # 响应示例
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "roles": 11 }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    version: &'static str,
    /// 已持久化的职位数量
    #[serde(skip_serializing_if = "Option::is_none")]
    roles: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.roles.count().await {
        Ok(roles) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                roles: Some(roles),
                message: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "error",
                    version,
                    roles: None,
                    message: Some("store unavailable".to_string()),
                }),
            )
        }
    }
}
