//! 集成测试共用的内存仓储与审计接收方

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use inventory_service::api::routes;
use inventory_service::application::{AuditSink, InventoryHandler};
use inventory_service::domain::{
    InventoryFilter, InventoryItem, InventoryRepository, NewInventory, NewProduct, Product,
    ProductFilter, ProductRepository, StockAdjustment, Store, StoreRepository,
};
use serde_json::Value;
use stock_common::RecordActionRequest;
use stock_errors::{AppError, AppResult};
use tower::ServiceExt;

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn create(&self, product: &NewProduct) -> AppResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        let row = Product {
            id: rows.len() as i32 + 1,
            name: product.name.clone(),
            plu: product.plu,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let needle = filter.name.as_ref().map(|n| n.to_lowercase());
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                needle
                    .as_ref()
                    .is_none_or(|n| p.name.to_lowercase().contains(n))
            })
            .filter(|p| filter.plu.is_none_or(|plu| p.plu == Some(plu)))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryStores {
    pub rows: Mutex<Vec<Store>>,
}

#[async_trait]
impl StoreRepository for InMemoryStores {
    async fn find_by_id(&self, store_id: i32) -> AppResult<Option<Store>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.store_id == store_id)
            .cloned())
    }

    async fn create(&self, store_id: i32, store_name: &str) -> AppResult<Store> {
        let store = Store {
            store_id,
            store_name: store_name.to_string(),
        };
        self.rows.lock().unwrap().push(store.clone());
        Ok(store)
    }
}

#[derive(Default)]
pub struct InMemoryInventory {
    pub rows: Mutex<Vec<InventoryItem>>,
    /// 为 true 时插入失败，模拟门店已建而库存写入出错
    pub fail_insert: bool,
}

#[async_trait]
impl InventoryRepository for InMemoryInventory {
    async fn create(&self, inventory: &NewInventory) -> AppResult<InventoryItem> {
        if self.fail_insert {
            return Err(AppError::database("insert into inventory failed"));
        }
        let mut rows = self.rows.lock().unwrap();
        let item = InventoryItem {
            inventory_id: rows.len() as i32 + 1,
            plu: inventory.plu,
            store_id: inventory.store_id,
            stock_quantity: inventory.stock_quantity,
            order_quantity: inventory.order_quantity,
        };
        rows.push(item.clone());
        Ok(item)
    }

    async fn adjust_stock(
        &self,
        inventory_id: i32,
        adjustment: StockAdjustment,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(item) = rows.iter_mut().find(|i| i.inventory_id == inventory_id) else {
            return Ok(None);
        };
        match adjustment {
            StockAdjustment::Increase => item.stock_quantity += amount,
            StockAdjustment::Decrease => item.stock_quantity -= amount,
        }
        Ok(Some(item.clone()))
    }

    async fn list(&self, filter: &InventoryFilter) -> AppResult<Vec<InventoryItem>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| filter.plu.is_none_or(|v| i.plu == v))
            .filter(|i| filter.store_id.is_none_or(|v| i.store_id == v))
            .filter(|i| filter.stock_min.is_none_or(|v| i.stock_quantity >= v))
            .filter(|i| filter.stock_max.is_none_or(|v| i.stock_quantity <= v))
            .filter(|i| filter.order_min.is_none_or(|v| i.order_quantity >= v))
            .filter(|i| filter.order_max.is_none_or(|v| i.order_quantity <= v))
            .cloned()
            .collect())
    }
}

/// 记录所有审计调用
#[derive(Default)]
pub struct RecordingAudit {
    pub entries: Mutex<Vec<RecordActionRequest>>,
}

impl RecordingAudit {
    pub fn actions(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.action.clone())
            .collect()
    }
}

#[async_trait]
impl AuditSink for RecordingAudit {
    async fn record(&self, entry: RecordActionRequest) -> AppResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }
}

/// 历史服务不可用
pub struct FailingAudit;

#[async_trait]
impl AuditSink for FailingAudit {
    async fn record(&self, _entry: RecordActionRequest) -> AppResult<()> {
        Err(AppError::external_service("connection refused"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub stores: Arc<InMemoryStores>,
    pub inventory: Arc<InMemoryInventory>,
    pub audit: Arc<RecordingAudit>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_inventory(InMemoryInventory::default())
    }

    pub fn with_inventory(inventory: InMemoryInventory) -> Self {
        let stores = Arc::new(InMemoryStores::default());
        let inventory = Arc::new(inventory);
        let audit = Arc::new(RecordingAudit::default());

        let handler = InventoryHandler::new(
            Arc::new(InMemoryProducts::default()),
            stores.clone(),
            inventory.clone(),
            audit.clone(),
        );

        Self {
            router: routes(Arc::new(handler)),
            stores,
            inventory,
            audit,
        }
    }

    pub fn with_audit(audit: Arc<dyn AuditSink>) -> Router {
        let handler = InventoryHandler::new(
            Arc::new(InMemoryProducts::default()),
            Arc::new(InMemoryStores::default()),
            Arc::new(InMemoryInventory::default()),
            audit,
        );
        routes(Arc::new(handler))
    }
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
