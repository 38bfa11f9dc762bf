//! 集成测试共用的内存仓储

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use chrono::Utc;
use history_service::api::routes;
use history_service::application::HistoryHandler;
use history_service::domain::{ActionRecord, HistoryFilter, HistoryRepository, NewActionRecord};
use serde_json::Value;
use stock_errors::AppResult;
use tower::ServiceExt;

#[derive(Default)]
pub struct InMemoryHistory {
    pub rows: Mutex<Vec<ActionRecord>>,
}

#[async_trait]
impl HistoryRepository for InMemoryHistory {
    async fn insert(&self, record: &NewActionRecord) -> AppResult<ActionRecord> {
        let mut rows = self.rows.lock().unwrap();
        let row = ActionRecord {
            id: rows.len() as i32 + 1,
            action: record.action.clone(),
            shop_id: record.shop_id,
            plu: record.plu,
            action_details: record.details.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self, filter: &HistoryFilter) -> AppResult<Vec<ActionRecord>> {
        let mut rows: Vec<ActionRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.shop_id.is_none_or(|v| r.shop_id == Some(v)))
            .filter(|r| filter.plu.is_none_or(|v| r.plu == Some(v)))
            .filter(|r| filter.start_date.is_none_or(|v| r.created_at >= v))
            .filter(|r| filter.end_date.is_none_or(|v| r.created_at <= v))
            .filter(|r| filter.action.as_ref().is_none_or(|v| &r.action == v))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(rows
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit as usize)
            .collect())
    }
}

pub fn test_router() -> (Router, Arc<InMemoryHistory>) {
    let repo = Arc::new(InMemoryHistory::default());
    let handler = HistoryHandler::new(repo.clone());
    (routes(Arc::new(handler)), repo)
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
