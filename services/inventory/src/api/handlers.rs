//! 库存服务 HTTP 处理函数

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use stock_errors::{ApiJson, ApiQuery, AppResult};
use tracing::info;

use super::dto::{
    AdjustStockRequest, CreateInventoryRequest, CreateProductRequest, InventoryQuery, ProductQuery,
};
use crate::application::InventoryHandler;
use crate::domain::{InventoryItem, Product};

pub type AppState = Arc<InventoryHandler>;

/// 新建商品
pub async fn create_product(
    State(handler): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    info!(name = %req.name, "Create product request");
    let product = handler.create_product(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = handler.list_products(query.into()).await?;
    Ok(Json(products))
}

/// 新建库存，必要时先建门店
pub async fn create_inventory(
    State(handler): State<AppState>,
    ApiJson(req): ApiJson<CreateInventoryRequest>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    info!(plu = req.plu, store_id = req.store_id, "Create inventory request");
    let item = handler.create_inventory(req.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// 没有匹配行时返回 `null`
pub async fn increase_stock(
    State(handler): State<AppState>,
    ApiJson(req): ApiJson<AdjustStockRequest>,
) -> AppResult<Json<Option<InventoryItem>>> {
    let item = handler
        .increase_stock(req.inventory_id, req.amount)
        .await?;
    Ok(Json(item))
}

pub async fn decrease_stock(
    State(handler): State<AppState>,
    ApiJson(req): ApiJson<AdjustStockRequest>,
) -> AppResult<Json<Option<InventoryItem>>> {
    let item = handler
        .decrease_stock(req.inventory_id, req.amount)
        .await?;
    Ok(Json(item))
}

pub async fn list_inventory(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<InventoryQuery>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = handler.list_inventory(query.into()).await?;
    Ok(Json(items))
}
