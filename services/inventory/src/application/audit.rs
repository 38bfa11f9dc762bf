//! 审计通知
//!
//! 库存服务写库成功后向历史服务发送一条审计记录。
//! 通知是尽力而为的：失败只记录日志，不影响已经确定的响应。

use async_trait::async_trait;
use stock_common::RecordActionRequest;
use stock_errors::AppResult;

/// 审计动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CreateProduct,
    CreateStore,
    CreateInventory,
    IncreaseStock,
    DecreaseStock,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CreateProduct => "create_product",
            AuditAction::CreateStore => "create_store",
            AuditAction::CreateInventory => "create_inventory",
            AuditAction::IncreaseStock => "increase_stock",
            AuditAction::DecreaseStock => "decrease_stock",
        }
    }
}

/// 审计记录的接收方
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, entry: RecordActionRequest) -> AppResult<()>;
}
