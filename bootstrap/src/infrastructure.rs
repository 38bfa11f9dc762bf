//! 基础设施资源管理
//!
//! 连接池由服务进程持有，显式传入各仓储

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use stock_adapter_postgres::{Migration, MigrationManager, PostgresConfig, SslMode, create_pool};
use stock_config::AppConfig;
use stock_errors::AppResult;
use tracing::info;

/// 基础设施资源容器
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 不会连接数据库，连接错误在第一次查询时出现
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let postgres_pool = create_pool(&postgres_config(&config)?);
        Ok(Self {
            config,
            postgres_pool,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 按配置执行迁移（`database.run_migrations`）
    pub async fn run_migrations(&self, table: &str, migrations: &[Migration]) -> AppResult<()> {
        if !self.config.database.run_migrations {
            info!("Skipping migrations (database.run_migrations = false)");
            return Ok(());
        }

        let result = MigrationManager::new(self.postgres_pool())
            .with_table_name(table)
            .migrate(migrations)
            .await?
            .into_result()?;

        info!(
            applied = result.applied_count(),
            skipped = result.skipped.len(),
            "Migrations finished"
        );
        Ok(())
    }
}

/// 从应用配置构造连接参数
pub fn postgres_config(config: &AppConfig) -> AppResult<PostgresConfig> {
    let db = &config.database;
    let ssl_mode: SslMode = db.ssl_mode.parse()?;

    Ok(
        PostgresConfig::from_components(&db.host, db.port, &db.name, &db.user)
            .with_password(secrecy::Secret::new(db.password.expose_secret().clone()))
            .with_ssl_mode(ssl_mode)
            .with_pool(0, db.max_connections)
            .with_acquire_timeout(Duration::from_secs(30))
            .with_application_name(&config.app_name),
    )
}
