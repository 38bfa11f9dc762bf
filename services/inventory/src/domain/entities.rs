//! 商品、门店与库存实体

use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub plu: Option<i32>,
}

/// 新建商品参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub plu: Option<i32>,
}

/// 商品查询条件，所有条件按 AND 组合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// 名称子串，大小写不敏感
    pub name: Option<String>,
    pub plu: Option<i32>,
}

/// 门店，`store_id` 由调用方指定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: i32,
    pub store_name: String,
}

/// 某门店某商品的库存记录
///
/// 数量没有下限，并发减少后可以为负数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub inventory_id: i32,
    pub plu: i32,
    pub store_id: i32,
    pub stock_quantity: i32,
    pub order_quantity: i32,
}

/// 新建库存参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventory {
    pub plu: i32,
    pub store_id: i32,
    pub stock_quantity: i32,
    pub order_quantity: i32,
    /// 门店不存在时用于创建门店
    pub store_name: Option<String>,
}

impl NewInventory {
    /// 去掉首尾空白后的非空门店名
    pub fn store_name(&self) -> Option<&str> {
        self.store_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// 库存查询条件，范围条件均为闭区间
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub plu: Option<i32>,
    pub store_id: Option<i32>,
    pub stock_min: Option<i32>,
    pub stock_max: Option<i32>,
    pub order_min: Option<i32>,
    pub order_max: Option<i32>,
}

/// 库存调整方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Increase,
    Decrease,
}
