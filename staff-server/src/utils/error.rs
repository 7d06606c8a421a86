//! 统一错误处理
//!
//! 错误体系定义在 `shared::error`，客户端与服务端共用同一套错误码。
//! 本模块为处理器代码重新导出这些类型。
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::employee_not_found(7))
//! ```

pub use shared::error::{
    AppError, AppResult, ErrorCategory, ErrorCode, PROBLEM_JSON, ProblemDetails, SUBMISSION_TITLE,
};
