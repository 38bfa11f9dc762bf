//! 历史服务 HTTP 客户端

use std::time::Duration;

use async_trait::async_trait;
use stock_common::RecordActionRequest;
use stock_config::HistoryConfig;
use stock_errors::{AppError, AppResult};

use crate::application::AuditSink;

/// 通过 `POST {base}/history` 写入审计记录
#[derive(Clone)]
pub struct HistoryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HistoryClient {
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/history", base_url.as_ref().trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &HistoryConfig) -> AppResult<Self> {
        Self::new(config.base_url(), Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AuditSink for HistoryClient {
    async fn record(&self, entry: RecordActionRequest) -> AppResult<()> {
        self.client
            .post(&self.endpoint)
            .json(&entry)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::external_service(format!("History service: {}", e)))?;

        Ok(())
    }
}
