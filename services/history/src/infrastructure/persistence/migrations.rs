//! 历史服务的数据库迁移

use stock_adapter_postgres::Migration;

/// 迁移记录表，与库存服务分开
pub const MIGRATIONS_TABLE: &str = "_history_migrations";

pub fn all() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_action_history",
        include_str!("../../../migrations/0001_create_action_history.sql"),
    )]
}
