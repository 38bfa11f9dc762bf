//! 仓储接口

use async_trait::async_trait;
use stock_errors::AppResult;

use super::entities::{ActionRecord, HistoryFilter, NewActionRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// 插入一条记录并返回数据库生成的行
    async fn insert(&self, record: &NewActionRecord) -> AppResult<ActionRecord>;

    /// 按 `created_at` 倒序分页查询
    async fn list(&self, filter: &HistoryFilter) -> AppResult<Vec<ActionRecord>>;
}
