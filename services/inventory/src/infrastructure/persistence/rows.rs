//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::{InventoryItem, Product, Store};

/// 商品数据库行
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub plu: Option<i32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            plu: row.plu,
        }
    }
}

/// 门店数据库行
#[derive(Debug, FromRow)]
pub struct StoreRow {
    pub store_id: i32,
    pub store_name: String,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Store {
            store_id: row.store_id,
            store_name: row.store_name,
        }
    }
}

/// 库存数据库行
#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub inventory_id: i32,
    pub plu: i32,
    pub store_id: i32,
    pub stock_quantity: i32,
    pub order_quantity: i32,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        InventoryItem {
            inventory_id: row.inventory_id,
            plu: row.plu,
            store_id: row.store_id,
            stock_quantity: row.stock_quantity,
            order_quantity: row.order_quantity,
        }
    }
}
