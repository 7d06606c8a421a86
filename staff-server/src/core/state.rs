use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::hal::ResponseAssembler;
use crate::services::{EmployeeService, RoleService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 由具体的服务值显式构造，克隆成本很低 (连接池与 Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | roles | RoleService | 职位查询 |
/// | employees | EmployeeService | 员工操作 |
/// | assembler | Arc<ResponseAssembler> | 视图与超链接 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub roles: RoleService,
    pub employees: EmployeeService,
    pub assembler: Arc<ResponseAssembler>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, pool: SqlitePool, assembler: ResponseAssembler) -> Self {
        Self {
            config: Arc::new(config),
            roles: RoleService::new(pool.clone()),
            employees: EmployeeService::new(pool),
            assembler: Arc::new(assembler),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 链接根地址 (PUBLIC_BASE_URL)
    /// 2. 数据库 (迁移 + 职位目录种子数据)
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let assembler = ResponseAssembler::new(&config.public_base_url)?;

        let db = DbService::connect(&config.database_url)
            .await
            .map_err(ServerError::Database)?;

        Ok(Self::new(config.clone(), db.pool, assembler))
    }
}
