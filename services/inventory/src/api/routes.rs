//! 库存服务路由

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use super::handlers;
use crate::application::InventoryHandler;

pub fn routes(handler: Arc<InventoryHandler>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/inventory",
            get(handlers::list_inventory).post(handlers::create_inventory),
        )
        .route("/inventory/increase", patch(handlers::increase_stock))
        .route("/inventory/decrease", patch(handlers::decrease_stock))
        .with_state(handler)
}
