//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口
//! - [`roles`] - 职位查询接口 (只读)
//! - [`extract`] - 提取器，拒绝时返回统一错误格式

pub mod extract;

pub mod employees;
pub mod health;
pub mod roles;

// 处理器常用类型
pub use crate::utils::{AppError, AppResult};
