//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use stock_config::{AppConfig, ServiceDefaults};
use stock_errors::AppResult;
use stock_telemetry::init_metrics;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 配置目录环境变量
pub const CONFIG_DIR_ENV: &str = "CONFIG_DIR";

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 加载 `.env` 与配置
/// 2. 初始化日志
/// 3. 安装 Prometheus recorder
/// 4. 创建连接池（惰性）
/// 5. 调用闭包构建业务路由
/// 6. 挂载 `/health`、`/ready`、`/metrics` 并启动服务器，处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// run(DEFAULTS, |infra| async move {
///     Ok(my_routes(infra.postgres_pool()))
/// })
/// .await
/// ```
pub async fn run<F, Fut>(
    defaults: ServiceDefaults,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    dotenvy::dotenv().ok();

    let config_dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir, defaults)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    };

    let infra = Infrastructure::from_config(config.clone())?;
    let pool = infra.postgres_pool();

    let router = router_builder(infra).await?;
    let app = router
        .merge(health_routes(config.app_name.clone(), pool.clone(), metrics))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Service stopped");

    Ok(())
}
