//! 服务层 - 员工与职位的领域操作
//!
//! # 服务列表
//!
//! - [`RoleService`] - 职位目录查询 (只读)
//! - [`EmployeeService`] - 员工增删改查与按职位筛选
//!
//! 涉及多行的操作都在同一个存储事务内完成。

pub mod employee;
pub mod error;
pub mod role;

pub use employee::EmployeeService;
pub use error::{RoleKey, ServiceError, ServiceResult};
pub use role::RoleService;
