//! 历史服务的请求契约
//!
//! 库存服务发送、历史服务接收同一个结构

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 记录一条操作历史
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordActionRequest {
    pub action: String,
    #[serde(default)]
    pub shop_id: Option<i32>,
    #[serde(default)]
    pub plu: Option<i32>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl RecordActionRequest {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            shop_id: None,
            plu: None,
            details: None,
        }
    }

    pub fn with_shop_id(mut self, shop_id: i32) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    pub fn with_plu(mut self, plu: Option<i32>) -> Self {
        self.plu = plu;
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
