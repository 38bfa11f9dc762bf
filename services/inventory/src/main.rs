//! inventory-service - 商品、门店与库存 HTTP 服务

use std::sync::Arc;

use inventory_service::{
    api, infrastructure::HistoryClient, infrastructure::persistence::migrations, postgres_handler,
};
use stock_bootstrap::{Infrastructure, run};
use stock_config::ServiceDefaults;
use tracing::info;

const DEFAULTS: ServiceDefaults = ServiceDefaults {
    app_name: "inventory-service",
    port: 8003,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(DEFAULTS, |infra: Infrastructure| async move {
        infra
            .run_migrations(migrations::MIGRATIONS_TABLE, &migrations::all())
            .await?;

        let history = HistoryClient::from_config(&infra.config().history)?;
        info!(endpoint = history.endpoint(), "History client initialized");

        let handler = postgres_handler(infra.postgres_pool(), Arc::new(history));
        Ok(api::routes(Arc::new(handler)))
    })
    .await
}
