//! PostgreSQL 连接管理

use sqlx::postgres::{PgPool, PgPoolOptions};
use stock_errors::{AppError, AppResult};
use tracing::info;

use crate::PostgresConfig;

/// 创建 PostgreSQL 连接池
///
/// 连接池是惰性的：构造时不连接数据库，连接失败在第一次查询时以错误返回。
pub fn create_pool(config: &PostgresConfig) -> PgPool {
    info!(url = %config.display_url(), max_connections = config.pool_max, "Creating PostgreSQL pool");

    PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_lazy_with(config.connect_options())
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unreachable_database_fails_on_first_query() {
        let config = PostgresConfig::from_components("127.0.0.1", 1, "missing", "nobody")
            .with_acquire_timeout(Duration::from_millis(500));

        let pool = create_pool(&config);
        let err = check_connection(&pool).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
