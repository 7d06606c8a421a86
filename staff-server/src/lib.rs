//! Staff Server - 员工与职位的超媒体 REST 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite (sqlx)，嵌入式迁移，启动时写入职位目录
//! - **服务** (`services`): 员工增删改查，职位只读查询
//! - **超媒体** (`hal`): 视图组装与绝对链接
//! - **HTTP API** (`api`): 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、启动错误、服务器
//! ├── db/            # 连接池、迁移、种子数据、仓储
//! ├── services/      # 领域服务
//! ├── hal/           # ResponseAssembler、HAL 响应
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod hal;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState, build_app};
pub use hal::ResponseAssembler;
pub use services::{EmployeeService, RoleService};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// 日志初始化
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 读取 `.env`，初始化日志，返回加载的配置
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let config = Config::from_env();

    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    if dotenv_loaded {
        tracing::debug!("Loaded .env");
    }
    config
}

pub fn print_banner() {
    println!(
        r#"
  ____  _         __  __
 / ___|| |_ __ _ / _|/ _|
 \___ \| __/ _` | |_| |_
  ___) | || (_| |  _|  _|
 |____/ \__\__,_|_| |_|
    "#
    );
}
