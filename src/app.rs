use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::infrastructure::{HttpFetcher, PageFetcher};
use crate::models::SummariseResponse;
use crate::services::{
    DocumentStore, JsonlDocumentStore, NoopDocumentStore, NoopSummaryStore, SummaryStore,
    SupabaseSummaryStore,
};
use crate::utils::logging::log_startup;
use crate::workflow::SummariseFlow;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 应用主结构
///
/// 启动时一次性构建所有依赖，之后只读共享
pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let flow = build_flow(&config)?;

        Ok(Self {
            config,
            state: AppState::new(flow),
        })
    }

    /// 启动 HTTP 服务
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", self.config.bind_addr))?;

        info!("✓ 服务已启动: http://{}", listener.local_addr()?);

        axum::serve(listener, create_router(self.state)).await?;
        Ok(())
    }

    /// 只处理一个地址，输出 JSON 结果
    pub async fn run_once(&self, url: &str) -> Result<String> {
        let output = match self.state.flow.run(url).await {
            Ok(record) => serde_json::to_string_pretty(&SummariseResponse::from(&record))?,
            Err(e) => serde_json::to_string_pretty(&serde_json::json!({
                "error": e.public_message(),
                "detail": e.to_string(),
            }))?,
        };
        Ok(output)
    }
}

/// 根据配置组装流程
pub fn build_flow(config: &Config) -> Result<SummariseFlow> {
    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(HttpFetcher::new(config).context("无法创建 HTTP 客户端")?);

    let summary_store: Arc<dyn SummaryStore> = match SupabaseSummaryStore::from_config(config) {
        Some(store) => Arc::new(store),
        None => Arc::new(NoopSummaryStore),
    };

    let document_store: Arc<dyn DocumentStore> = match &config.document_store_path {
        Some(path) => Arc::new(JsonlDocumentStore::new(path)),
        None => Arc::new(NoopDocumentStore),
    };

    Ok(SummariseFlow::new(fetcher, summary_store, document_store))
}
