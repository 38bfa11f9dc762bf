//! 历史服务路由

use std::sync::Arc;

use axum::{Router, routing::get};

use super::handlers;
use crate::application::HistoryHandler;

pub fn routes(handler: Arc<HistoryHandler>) -> Router {
    Router::new()
        .route(
            "/history",
            get(handlers::list_history).post(handlers::record_action),
        )
        .with_state(handler)
}
