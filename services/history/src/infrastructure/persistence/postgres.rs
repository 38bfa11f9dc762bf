//! PostgreSQL repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use stock_adapter_postgres::FilterBuilder;
use stock_errors::{AppError, AppResult};

use crate::domain::{ActionRecord, HistoryFilter, HistoryRepository, NewActionRecord};

use super::rows::ActionRecordRow;

const COLUMNS: &str = "id, action, shop_id, plu, action_details, created_at";

pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn insert(&self, record: &NewActionRecord) -> AppResult<ActionRecord> {
        let row = sqlx::query_as::<_, ActionRecordRow>(&format!(
            r#"
            INSERT INTO action_history (action, shop_id, plu, action_details, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&record.action)
        .bind(record.shop_id)
        .bind(record.plu)
        .bind(&record.details)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        Ok(row.into())
    }

    async fn list(&self, filter: &HistoryFilter) -> AppResult<Vec<ActionRecord>> {
        let limit = i64::from(filter.pagination.limit);
        let offset = i64::try_from(filter.pagination.offset())
            .map_err(|_| AppError::validation("page is out of range"))?;

        let mut builder = FilterBuilder::new(format!("SELECT {COLUMNS} FROM action_history"));
        builder
            .eq("shop_id", filter.shop_id)
            .eq("plu", filter.plu)
            .gte("created_at", filter.start_date)
            .lte("created_at", filter.end_date)
            .eq("action", filter.action.clone())
            .order_by("created_at DESC, id DESC")
            .paginate(limit, offset);

        let mut query = builder.finish();
        let rows = query
            .build_query_as::<ActionRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
