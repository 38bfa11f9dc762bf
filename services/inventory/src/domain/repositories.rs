//! 仓储接口

use async_trait::async_trait;
use stock_errors::AppResult;

use super::entities::{
    InventoryFilter, InventoryItem, NewInventory, NewProduct, Product, ProductFilter,
    StockAdjustment, Store,
};

/// 商品仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 新建商品，返回带 id 的记录
    async fn create(&self, product: &NewProduct) -> AppResult<Product>;

    /// 列表查询
    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>>;
}

/// 门店仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, store_id: i32) -> AppResult<Option<Store>>;

    async fn create(&self, store_id: i32, store_name: &str) -> AppResult<Store>;
}

/// 库存仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn create(&self, inventory: &NewInventory) -> AppResult<InventoryItem>;

    /// 原子地调整 `stock_quantity`，记录不存在时返回 `None`
    async fn adjust_stock(
        &self,
        inventory_id: i32,
        adjustment: StockAdjustment,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>>;

    /// 列表查询
    async fn list(&self, filter: &InventoryFilter) -> AppResult<Vec<InventoryItem>>;
}
