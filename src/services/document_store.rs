//! 全文存储服务 - 业务能力层
//!
//! 只负责"保存一篇全文"能力，每篇文档追加为一行 JSON

use crate::error::StoreError;
use crate::models::BlogDocument;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 全文存储
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save_document(&self, doc: &BlogDocument) -> Result<(), StoreError>;
}

/// JSON Lines 文件存储
pub struct JsonlDocumentStore {
    path: PathBuf,
}

impl JsonlDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for JsonlDocumentStore {
    async fn save_document(&self, doc: &BlogDocument) -> Result<(), StoreError> {
        debug!(
            "写入全文: {} | 长度: {} 字符",
            doc.url,
            doc.full_text.chars().count()
        );

        let mut line = serde_json::to_string(doc)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

/// 未配置时使用的空存储
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocumentStore;

#[async_trait]
impl DocumentStore for NoopDocumentStore {
    async fn save_document(&self, doc: &BlogDocument) -> Result<(), StoreError> {
        debug!("全文存储未启用，跳过: {}", doc.url);
        Ok(())
    }
}
