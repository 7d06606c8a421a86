/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件也会被读取)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:staff.db | SQLite 数据库 |
/// | PUBLIC_BASE_URL | http://localhost:{HTTP_PORT} | 超链接的根地址 |
/// | CORS_ALLOWED_ORIGIN | http://localhost:8181 | 浏览器客户端来源 |
/// | STATIC_DIR | (无) | 静态文件目录 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (无) | 日志文件目录 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=9090 DATABASE_URL=sqlite::memory: cargo run -p staff-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// sqlx SQLite 连接串
    pub database_url: String,
    /// 生成链接时使用的公开地址
    pub public_base_url: String,
    pub cors_allowed_origin: String,
    /// 浏览器客户端目录，作为路由未命中时的回退
    pub static_dir: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    var(key).and_then(|v| v.parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let http_port = parsed("HTTP_PORT").unwrap_or(8080);
        Self {
            http_host: var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port,
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite:staff.db".into()),
            public_base_url: var("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{http_port}")),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:8181".into()),
            static_dir: var("STATIC_DIR"),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parsed("LOG_JSON").unwrap_or(false),
            log_dir: var("LOG_DIR"),
            shutdown_timeout_ms: parsed("SHUTDOWN_TIMEOUT_MS").unwrap_or(10000),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 测试用配置: 内存数据库，固定链接根地址
    pub fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            database_url: "sqlite::memory:".into(),
            public_base_url: "http://localhost:8080".into(),
            cors_allowed_origin: "http://localhost:8181".into(),
            static_dir: None,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            shutdown_timeout_ms: 1000,
            environment: "test".into(),
        }
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
