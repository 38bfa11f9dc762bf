//! PostgreSQL repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use stock_adapter_postgres::FilterBuilder;
use stock_errors::{AppError, AppResult};

use crate::domain::{
    InventoryFilter, InventoryItem, InventoryRepository, NewInventory, NewProduct, Product,
    ProductFilter, ProductRepository, StockAdjustment, Store, StoreRepository,
};

use super::rows::{InventoryRow, ProductRow, StoreRow};

const INVENTORY_COLUMNS: &str =
    "inventory_id, plu, store_id, stock_quantity, order_quantity";

// ============================================================================
// ProductRepository 实现
// ============================================================================

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &NewProduct) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, plu)
            VALUES ($1, $2)
            RETURNING id, name, plu
            "#,
        )
        .bind(&product.name)
        .bind(product.plu)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.into())
    }

    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let mut builder = FilterBuilder::new("SELECT id, name, plu FROM products");
        builder
            .ilike_contains("name", filter.name.as_deref())
            .eq("plu", filter.plu)
            .order_by("id");

        let mut query = builder.finish();
        let rows = query
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// StoreRepository 实现
// ============================================================================

pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn find_by_id(&self, store_id: i32) -> AppResult<Option<Store>> {
        let row = sqlx::query_as::<_, StoreRow>(
            "SELECT store_id, store_name FROM stores WHERE store_id = $1",
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, store_id: i32, store_name: &str) -> AppResult<Store> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            INSERT INTO stores (store_id, store_name)
            VALUES ($1, $2)
            RETURNING store_id, store_name
            "#,
        )
        .bind(store_id)
        .bind(store_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.into())
    }
}

// ============================================================================
// InventoryRepository 实现
// ============================================================================

pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn create(&self, inventory: &NewInventory) -> AppResult<InventoryItem> {
        let row = sqlx::query_as::<_, InventoryRow>(&format!(
            r#"
            INSERT INTO inventory (plu, store_id, stock_quantity, order_quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(inventory.plu)
        .bind(inventory.store_id)
        .bind(inventory.stock_quantity)
        .bind(inventory.order_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.into())
    }

    /// 单条语句内完成读改写，并发调整不会丢失更新
    async fn adjust_stock(
        &self,
        inventory_id: i32,
        adjustment: StockAdjustment,
        amount: i32,
    ) -> AppResult<Option<InventoryItem>> {
        let op = match adjustment {
            StockAdjustment::Increase => "+",
            StockAdjustment::Decrease => "-",
        };

        let row = sqlx::query_as::<_, InventoryRow>(&format!(
            r#"
            UPDATE inventory
            SET stock_quantity = stock_quantity {op} $1
            WHERE inventory_id = $2
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(amount)
        .bind(inventory_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, filter: &InventoryFilter) -> AppResult<Vec<InventoryItem>> {
        let mut builder = FilterBuilder::new(format!("SELECT {INVENTORY_COLUMNS} FROM inventory"));
        builder
            .eq("plu", filter.plu)
            .eq("store_id", filter.store_id)
            .gte("stock_quantity", filter.stock_min)
            .lte("stock_quantity", filter.stock_max)
            .gte("order_quantity", filter.order_min)
            .lte("order_quantity", filter.order_max)
            .order_by("inventory_id");

        let mut query = builder.finish();
        let rows = query
            .build_query_as::<InventoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
