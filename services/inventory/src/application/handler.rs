//! 库存服务处理器
//!
//! 每个写操作先落库，再通知历史服务。两步不在同一个事务里。

use std::sync::Arc;

use serde::Serialize;
use stock_common::RecordActionRequest;
use stock_errors::{AppError, AppResult};
use tracing::{debug, info, warn};

use crate::application::audit::{AuditAction, AuditSink};
use crate::domain::{
    InventoryFilter, InventoryItem, InventoryRepository, NewInventory, NewProduct, Product,
    ProductFilter, ProductRepository, StockAdjustment, StoreRepository,
};

pub struct InventoryHandler {
    products: Arc<dyn ProductRepository>,
    stores: Arc<dyn StoreRepository>,
    inventory: Arc<dyn InventoryRepository>,
    audit: Arc<dyn AuditSink>,
}

impl InventoryHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        stores: Arc<dyn StoreRepository>,
        inventory: Arc<dyn InventoryRepository>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            products,
            stores,
            inventory,
            audit,
        }
    }

    /// 新建商品
    pub async fn create_product(&self, input: NewProduct) -> AppResult<Product> {
        let product = self.products.create(&input).await?;
        info!(product_id = product.id, "Product created");

        self.notify(AuditAction::CreateProduct, None, product.plu, &product)
            .await;
        Ok(product)
    }

    pub async fn list_products(&self, filter: ProductFilter) -> AppResult<Vec<Product>> {
        self.products.list(&filter).await
    }

    /// 新建库存记录，门店不存在时先创建门店
    ///
    /// 门店和库存是两条独立语句：门店创建成功而库存写入失败时，
    /// 会留下一个没有库存的门店。
    pub async fn create_inventory(&self, input: NewInventory) -> AppResult<InventoryItem> {
        if self.stores.find_by_id(input.store_id).await?.is_none() {
            let store_name = input.store_name().ok_or_else(|| {
                AppError::validation(format!(
                    "Store {} does not exist and store_name was not provided",
                    input.store_id
                ))
            })?;

            let store = self.stores.create(input.store_id, store_name).await?;
            info!(store_id = store.store_id, "Store created");

            self.notify(AuditAction::CreateStore, Some(store.store_id), None, &store)
                .await;
        }

        let item = self.inventory.create(&input).await?;
        info!(
            inventory_id = item.inventory_id,
            store_id = item.store_id,
            plu = item.plu,
            "Inventory created"
        );

        self.notify(
            AuditAction::CreateInventory,
            Some(item.store_id),
            Some(item.plu),
            &item,
        )
        .await;
        Ok(item)
    }

    pub async fn increase_stock(
        &self,
        inventory_id: i32,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>> {
        self.adjust_stock(inventory_id, StockAdjustment::Increase, amount)
            .await
    }

    pub async fn decrease_stock(
        &self,
        inventory_id: i32,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>> {
        self.adjust_stock(inventory_id, StockAdjustment::Decrease, amount)
            .await
    }

    /// 不校验 amount 的符号，也不限制结果下限
    async fn adjust_stock(
        &self,
        inventory_id: i32,
        adjustment: StockAdjustment,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>> {
        let updated = self
            .inventory
            .adjust_stock(inventory_id, adjustment, amount)
            .await?;

        let Some(item) = updated else {
            debug!(inventory_id, "No inventory row matched, nothing to audit");
            return Ok(None);
        };

        let action = match adjustment {
            StockAdjustment::Increase => AuditAction::IncreaseStock,
            StockAdjustment::Decrease => AuditAction::DecreaseStock,
        };
        self.notify(action, Some(item.store_id), Some(item.plu), &item)
            .await;

        Ok(Some(item))
    }

    pub async fn list_inventory(&self, filter: InventoryFilter) -> AppResult<Vec<InventoryItem>> {
        self.inventory.list(&filter).await
    }

    /// 发送审计记录，失败只记日志
    async fn notify<T: Serialize>(
        &self,
        action: AuditAction,
        shop_id: Option<i32>,
        plu: Option<i32>,
        details: &T,
    ) {
        let details = match serde_json::to_value(details) {
            Ok(value) => value,
            Err(e) => {
                warn!(action = action.as_str(), error = %e, "Failed to serialize audit details");
                record_outcome(action, "failure");
                return;
            }
        };

        let mut entry = RecordActionRequest::new(action.as_str())
            .with_plu(plu)
            .with_details(details);
        entry.shop_id = shop_id;

        match self.audit.record(entry).await {
            Ok(()) => {
                debug!(action = action.as_str(), "Audit record sent");
                record_outcome(action, "success");
            }
            Err(e) => {
                warn!(action = action.as_str(), error = %e, "Failed to record audit entry");
                record_outcome(action, "failure");
            }
        }
    }
}

fn record_outcome(action: AuditAction, outcome: &'static str) {
    metrics::counter!(
        "audit_notifications_total",
        "action" => action.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
