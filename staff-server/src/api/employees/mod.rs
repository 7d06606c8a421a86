//! 员工 API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /employees | GET, POST | 列表 / 新建 |
//! | /employees/{id} | GET, PUT, DELETE | 查询 / 覆盖或新建 / 删除 |
//! | /employees/roleid/{roleId} | GET | 按职位 id 筛选 |
//! | /employees/role/{jobTitle} | GET | 按职位名称筛选 |
//! | /employees/role?job= | GET | 按职位名称筛选 (查询参数) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 员工路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/employees/roleid/{role_id}", get(handler::list_by_role_id))
        .route("/employees/role/{job_title}", get(handler::list_by_role_path))
        .route("/employees/role", get(handler::list_by_role_param))
}
