//! Geopoints - 地理位置点 CRUD 服务
//!
//! 启动流程：加载配置 → 初始化日志 → 构造内存仓储 → 启动 HTTP 服务

use std::sync::Arc;

use geopoints::application::LocationRepositoryPort;
use geopoints::config::{load_config, print_config};
use geopoints::infrastructure::http::{AppState, HttpServer, ServerConfig};
use geopoints::infrastructure::memory::InMemoryLocationRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},geopoints={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Geopoints - 地理位置点服务");
    print_config(&config);

    // 创建内存仓储
    let location_repo = if config.store.seed_samples {
        Arc::new(InMemoryLocationRepository::with_samples())
    } else {
        Arc::new(InMemoryLocationRepository::new())
    };
    tracing::info!(
        count = location_repo.count().await?,
        "Location store initialized"
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(location_repo);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
