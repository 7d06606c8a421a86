//! 服务器实现
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware};
use http::{HeaderValue, Method, header};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// CORS 仅放行配置的浏览器客户端来源 (`*` 表示任意来源)
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION]);

    let origin = config.cors_allowed_origin.trim();
    if origin == "*" {
        return layer.allow_origin(AllowOrigin::any());
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Ignoring invalid CORS_ALLOWED_ORIGIN");
            layer
        }
    }
}

/// 构建带状态与中间件的 Axum 路由
pub fn build_app(state: ServerState) -> Router {
    let cors = cors_layer(&state.config);

    let mut app = Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .merge(crate::api::roles::router());

    // 浏览器客户端: 未命中 API 路由时回退到静态文件
    if let Some(dir) = &state.config.static_dir {
        tracing::info!(dir = %dir, "Serving static files");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}

/// 等待 Ctrl-C (unix 上还有 SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// HTTP 服务器
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        // 职位种子数据在 initialize 中写入，先于端口监听
        let state = ServerState::initialize(&self.config).await?;

        let app = build_app(state);

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!("🦀 Staff Server listening on {}", local);

        let stop = Arc::new(Notify::new());
        let stopped = stop.clone();
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move { stopped.notified().await })
            .into_future();
        let mut serve = std::pin::pin!(serve);

        tokio::select! {
            result = &mut serve => return result.map_err(ServerError::Serve),
            _ = shutdown_signal() => {}
        }

        tracing::info!("Shutting down...");
        stop.notify_one();

        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        match tokio::time::timeout(timeout, serve).await {
            Ok(result) => result.map_err(ServerError::Serve)?,
            Err(_) => tracing::warn!(
                timeout_ms = self.config.shutdown_timeout_ms,
                "Graceful shutdown timed out, dropping open connections"
            ),
        }

        Ok(())
    }
}
