//! 历史服务 HTTP 处理函数

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use stock_common::RecordActionRequest;
use stock_errors::{ApiJson, ApiQuery, AppResult};

use super::dto::HistoryQuery;
use crate::application::HistoryHandler;
use crate::domain::ActionRecord;

pub type AppState = Arc<HistoryHandler>;

pub async fn record_action(
    State(handler): State<AppState>,
    ApiJson(req): ApiJson<RecordActionRequest>,
) -> AppResult<(StatusCode, Json<ActionRecord>)> {
    let record = handler.record(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_history(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> AppResult<Json<Vec<ActionRecord>>> {
    let records = handler.list(query.into_filter()?).await?;
    Ok(Json(records))
}
