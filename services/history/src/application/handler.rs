//! 历史服务处理器

use std::sync::Arc;

use stock_common::RecordActionRequest;
use stock_errors::AppResult;
use tracing::info;

use crate::domain::{ActionRecord, HistoryFilter, HistoryRepository};

pub struct HistoryHandler {
    repo: Arc<dyn HistoryRepository>,
}

impl HistoryHandler {
    pub fn new(repo: Arc<dyn HistoryRepository>) -> Self {
        Self { repo }
    }

    /// 记录一条操作，`action` 不做取值校验
    pub async fn record(&self, request: RecordActionRequest) -> AppResult<ActionRecord> {
        let record = self.repo.insert(&request.into()).await?;
        info!(
            id = record.id,
            action = %record.action,
            shop_id = ?record.shop_id,
            "Action recorded"
        );
        Ok(record)
    }

    pub async fn list(&self, filter: HistoryFilter) -> AppResult<Vec<ActionRecord>> {
        self.repo.list(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockHistoryRepository;
    use chrono::Utc;
    use serde_json::json;
    use stock_common::Pagination;
    use stock_errors::AppError;

    #[tokio::test]
    async fn test_record_passes_fields_through() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_insert()
            .withf(|r| r.action == "create_store" && r.shop_id == Some(7) && r.plu.is_none())
            .times(1)
            .returning(|r| {
                Ok(ActionRecord {
                    id: 1,
                    action: r.action.clone(),
                    shop_id: r.shop_id,
                    plu: r.plu,
                    action_details: r.details.clone(),
                    created_at: Utc::now(),
                })
            });

        let handler = HistoryHandler::new(Arc::new(repo));
        let record = handler
            .record(
                RecordActionRequest::new("create_store")
                    .with_shop_id(7)
                    .with_details(json!({ "store_id": 7, "store_name": "North" })),
            )
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.action_details.unwrap()["store_name"], "North");
    }

    #[tokio::test]
    async fn test_list_forwards_filter() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_list()
            .withf(|f| f.pagination == Pagination::new(Some(2), Some(5)) && f.plu == Some(4011))
            .times(1)
            .returning(|_| Ok(vec![]));

        let handler = HistoryHandler::new(Arc::new(repo));
        let records = handler
            .list(HistoryFilter {
                plu: Some(4011),
                pagination: Pagination::new(Some(2), Some(5)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AppError::database("relation \"action_history\" does not exist")));

        let handler = HistoryHandler::new(Arc::new(repo));
        let err = handler
            .record(RecordActionRequest::new("create_product"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
