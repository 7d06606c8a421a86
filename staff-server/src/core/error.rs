//! 启动错误
//!
//! 这里的错误会在监听前或监听期间终止进程。
//! 请求级别的失败使用 [`AppError`](crate::utils::AppError)。

use crate::hal::assembler::BaseUrlError;
use crate::utils::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(#[source] AppError),

    #[error("无法监听 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("服务器错误: {0}")]
    Serve(#[from] std::io::Error),
}

impl From<BaseUrlError> for ServerError {
    fn from(err: BaseUrlError) -> Self {
        ServerError::Config(format!("PUBLIC_BASE_URL: {err}"))
    }
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
