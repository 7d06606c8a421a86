use anyhow::Context;
use staff_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        base_url = %config.public_base_url,
        "🦀 Staff Server starting..."
    );

    // 2. 初始化 (迁移、职位目录) 并启动 HTTP 服务器
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e).context("staff server stopped");
    }

    Ok(())
}
