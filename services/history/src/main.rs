//! history-service - 操作历史 HTTP 服务

use std::sync::Arc;

use history_service::{
    api, application::HistoryHandler, infrastructure::PostgresHistoryRepository,
    infrastructure::persistence::migrations,
};
use stock_bootstrap::{Infrastructure, run};
use stock_config::ServiceDefaults;

const DEFAULTS: ServiceDefaults = ServiceDefaults {
    app_name: "history-service",
    port: 8002,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(DEFAULTS, |infra: Infrastructure| async move {
        infra
            .run_migrations(migrations::MIGRATIONS_TABLE, &migrations::all())
            .await?;

        let repo = Arc::new(PostgresHistoryRepository::new(infra.postgres_pool()));
        let handler = Arc::new(HistoryHandler::new(repo));
        Ok(api::routes(handler))
    })
    .await
}
