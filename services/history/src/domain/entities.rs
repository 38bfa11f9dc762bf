//! 操作历史实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stock_common::{Pagination, RecordActionRequest};

/// 一条操作历史，写入后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: i32,
    pub action: String,
    pub shop_id: Option<i32>,
    pub plu: Option<i32>,
    pub action_details: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// 新记录，`created_at` 由数据库生成
#[derive(Debug, Clone, PartialEq)]
pub struct NewActionRecord {
    pub action: String,
    pub shop_id: Option<i32>,
    pub plu: Option<i32>,
    pub details: Option<Value>,
}

impl From<RecordActionRequest> for NewActionRecord {
    fn from(req: RecordActionRequest) -> Self {
        Self {
            action: req.action,
            // 门店号 0 视为未提供
            shop_id: req.shop_id.filter(|id| *id != 0),
            plu: req.plu,
            // JSON null 与未提供一样存为 SQL NULL
            details: req.details.filter(|d| !d.is_null()),
        }
    }
}

/// 历史查询条件，日期范围为闭区间
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    pub shop_id: Option<i32>,
    pub plu: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub action: Option<String>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_details_become_absent() {
        let req = RecordActionRequest::new("create_product").with_details(Value::Null);
        assert!(NewActionRecord::from(req).details.is_none());
    }

    #[test]
    fn test_zero_shop_id_is_stored_as_null() {
        let req = RecordActionRequest::new("create_product").with_shop_id(0);
        assert!(NewActionRecord::from(req).shop_id.is_none());
    }

    #[test]
    fn test_request_fields_are_kept() {
        let req = RecordActionRequest::new("increase_stock")
            .with_shop_id(7)
            .with_plu(Some(4011))
            .with_details(json!({ "stock_quantity": 15 }));
        let record = NewActionRecord::from(req);

        assert_eq!(record.action, "increase_stock");
        assert_eq!(record.shop_id, Some(7));
        assert_eq!(record.plu, Some(4011));
        assert_eq!(record.details, Some(json!({ "stock_quantity": 15 })));
    }
}
