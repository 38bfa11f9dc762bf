//! inventory-service - 商品、门店与库存

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use sqlx::PgPool;

use application::{AuditSink, InventoryHandler};
use infrastructure::persistence::{
    PostgresInventoryRepository, PostgresProductRepository, PostgresStoreRepository,
};

/// 用 PostgreSQL 仓储组装处理器
pub fn postgres_handler(pool: PgPool, audit: Arc<dyn AuditSink>) -> InventoryHandler {
    InventoryHandler::new(
        Arc::new(PostgresProductRepository::new(pool.clone())),
        Arc::new(PostgresStoreRepository::new(pool.clone())),
        Arc::new(PostgresInventoryRepository::new(pool)),
        audit,
    )
}
