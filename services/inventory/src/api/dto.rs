//! 请求体与查询参数

use serde::Deserialize;
use stock_common::empty_string_as_none;

use crate::domain::{InventoryFilter, NewInventory, NewProduct, ProductFilter};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub plu: Option<i32>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            plu: req.plu,
        }
    }
}

/// 未提供的数量按 0 处理
#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub plu: i32,
    pub store_id: i32,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub order_quantity: i32,
    #[serde(default)]
    pub store_name: Option<String>,
}

impl From<CreateInventoryRequest> for NewInventory {
    fn from(req: CreateInventoryRequest) -> Self {
        NewInventory {
            plu: req.plu,
            store_id: req.store_id,
            stock_quantity: req.stock_quantity,
            order_quantity: req.order_quantity,
            store_name: req.store_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub inventory_id: i32,
    pub amount: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub plu: Option<i32>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        ProductFilter {
            name: query.name,
            plu: query.plu,
        }
    }
}

/// `shop_id` 对应库存表的 `store_id`
#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub plu: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub shop_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stock_min: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stock_max: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub order_min: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub order_max: Option<i32>,
}

impl From<InventoryQuery> for InventoryFilter {
    fn from(query: InventoryQuery) -> Self {
        InventoryFilter {
            plu: query.plu,
            store_id: query.shop_id,
            stock_min: query.stock_min,
            stock_max: query.stock_max,
            order_min: query.order_min,
            order_max: query.order_max,
        }
    }
}
