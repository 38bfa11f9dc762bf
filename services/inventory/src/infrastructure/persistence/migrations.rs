//! 库存服务的数据库迁移

use stock_adapter_postgres::Migration;

/// 迁移记录表，与历史服务分开
pub const MIGRATIONS_TABLE: &str = "_inventory_migrations";

pub fn all() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "create_products",
            include_str!("../../../migrations/0001_create_products.sql"),
        ),
        Migration::new(
            2,
            "create_stores",
            include_str!("../../../migrations/0002_create_stores.sql"),
        ),
        Migration::new(
            3,
            "create_inventory",
            include_str!("../../../migrations/0003_create_inventory.sql"),
        ),
    ]
}
