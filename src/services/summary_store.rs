//! 摘要记录存储 - 业务能力层
//!
//! 只负责"写一条摘要记录"能力，只写不读

use crate::config::Config;
use crate::error::StoreError;
use crate::models::SummaryRow;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// 摘要记录存储
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn save_summary(&self, row: &SummaryRow) -> Result<(), StoreError>;
}

/// Supabase (PostgREST) 表存储
///
/// 追加写入，不对 url 去重
pub struct SupabaseSummaryStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseSummaryStore {
    pub fn new(base_url: &str, api_key: impl Into<String>, table: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
        }
    }

    /// 配置齐全时创建，否则返回 None
    pub fn from_config(config: &Config) -> Option<Self> {
        match (&config.supabase_url, &config.supabase_key) {
            (Some(url), Some(key)) => Some(Self::new(url, key.clone(), &config.supabase_table)),
            _ => None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryStore for SupabaseSummaryStore {
    async fn save_summary(&self, row: &SummaryRow) -> Result<(), StoreError> {
        debug!("写入摘要记录: {}", row.url);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// 未配置时使用的空存储
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSummaryStore;

#[async_trait]
impl SummaryStore for NoopSummaryStore {
    async fn save_summary(&self, row: &SummaryRow) -> Result<(), StoreError> {
        debug!("摘要存储未启用，跳过: {}", row.url);
        Ok(())
    }
}
