//! 数据库行映射结构

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::ActionRecord;

/// 操作历史数据库行
#[derive(Debug, FromRow)]
pub struct ActionRecordRow {
    pub id: i32,
    pub action: String,
    pub shop_id: Option<i32>,
    pub plu: Option<i32>,
    pub action_details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<ActionRecordRow> for ActionRecord {
    fn from(row: ActionRecordRow) -> Self {
        ActionRecord {
            id: row.id,
            action: row.action,
            shop_id: row.shop_id,
            plu: row.plu,
            action_details: row.action_details,
            created_at: row.created_at,
        }
    }
}
