//! 健康检查与 metrics 路由
//!
//! - `/health`：存活检查
//! - `/ready`：数据库可用性检查
//! - `/metrics`：Prometheus 文本格式

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;
use stock_adapter_postgres::check_connection;
use stock_telemetry::HealthStatus;

#[derive(Clone)]
struct HealthState {
    app_name: String,
    pool: PgPool,
    metrics: Option<PrometheusHandle>,
}

/// 构建健康检查路由
pub fn health_routes(
    app_name: impl Into<String>,
    pool: PgPool,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let state = HealthState {
        app_name: app_name.into(),
        pool,
        metrics,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

async fn health_handler(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.app_name,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let mut status = HealthStatus::new();
    match check_connection(&state.pool).await {
        Ok(()) => status.add_check("database", true, None),
        Err(e) => status.add_check("database", false, Some(e.message().to_string())),
    }

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            handle.render(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::time::Duration;
    use stock_adapter_postgres::{PostgresConfig, create_pool};
    use tower::ServiceExt;

    fn unreachable_pool() -> PgPool {
        let config = PostgresConfig::from_components("127.0.0.1", 1, "missing", "nobody")
            .with_acquire_timeout(Duration::from_millis(300));
        create_pool(&config)
    }

    #[tokio::test]
    async fn test_health_is_ok_without_database() {
        let app = health_routes("inventory-service", unreachable_pool(), None);

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "inventory-service");
    }

    #[tokio::test]
    async fn test_ready_reports_unavailable_database() {
        let app = health_routes("history-service", unreachable_pool(), None);

        let req = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["healthy"], false);
        assert_eq!(body["checks"][0]["name"], "database");
    }

    #[tokio::test]
    async fn test_metrics_without_recorder() {
        let app = health_routes("history-service", unreachable_pool(), None);

        let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
