//! 博客摘要流程 - 流程层
//!
//! 核心职责：定义"一个地址"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验地址
//! 2. 抓取页面
//! 3. 提取正文（过短则拒绝）
//! 4. 取前三句作为摘要
//! 5. 逐词注释
//! 6. 后台写入两个存储（不等待、不影响响应）

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::error::{PipelineError, PipelineResult};
use crate::infrastructure::PageFetcher;
use crate::models::{BlogDocument, ResultRecord, SummaryRow};
use crate::services::{ContentExtractor, DocumentStore, Glossator, Summarizer, SummaryStore};
use crate::utils::truncate_text;
use crate::workflow::request_ctx::RequestCtx;

/// 正文最少字符数
pub const MIN_CONTENT_CHARS: usize = 50;

/// 校验地址：必须是带主机名的 http/https 绝对地址
pub fn validate_url(address: &str) -> PipelineResult<Url> {
    let address = address.trim();
    if address.is_empty() {
        return Err(PipelineError::InvalidInput("地址为空".to_string()));
    }

    let parsed = Url::parse(address)
        .map_err(|e| PipelineError::InvalidInput(format!("{} ({})", address, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PipelineError::InvalidInput(format!(
            "不支持的协议 {}: {}",
            parsed.scheme(),
            address
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(PipelineError::InvalidInput(format!("缺少主机名: {}", address)));
    }

    Ok(parsed)
}

/// 博客摘要流程
///
/// - 编排抓取 → 提取 → 摘要 → 注释
/// - 前三步失败立即返回
/// - 持久化在后台进行，失败只记日志
pub struct SummariseFlow {
    fetcher: Arc<dyn PageFetcher>,
    extractor: ContentExtractor,
    summarizer: Summarizer,
    glossator: Glossator,
    summary_store: Arc<dyn SummaryStore>,
    document_store: Arc<dyn DocumentStore>,
}

impl SummariseFlow {
    /// 使用默认的提取、摘要、注释服务创建流程
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        summary_store: Arc<dyn SummaryStore>,
        document_store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            fetcher,
            extractor: ContentExtractor::new(),
            summarizer: Summarizer::default(),
            glossator: Glossator::default(),
            summary_store,
            document_store,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub async fn run(&self, address: &str) -> PipelineResult<ResultRecord> {
        let ctx = RequestCtx::new(address.trim());

        // ========== 1. 校验地址 ==========
        let url = validate_url(address).map_err(|e| {
            warn!("{} ⚠️ {}", ctx, e);
            e
        })?;

        // ========== 2. 抓取页面 ==========
        info!("{} 🌐 正在抓取: {}", ctx, url);
        let html = self.fetcher.fetch(url.as_str()).await.map_err(|e| {
            error!("{} ❌ 抓取失败: {}", ctx, e);
            PipelineError::Fetch(e)
        })?;

        // ========== 3. 提取正文 ==========
        let extractor = self.extractor;
        let full_text = tokio::task::spawn_blocking(move || extractor.extract(&html))
            .await
            .map_err(|e| {
                error!("{} ❌ 正文提取任务异常: {}", ctx, e);
                PipelineError::Internal(format!("正文提取任务异常: {}", e))
            })?;

        let length = full_text.chars().count();
        if length < MIN_CONTENT_CHARS {
            warn!("{} ⚠️ 正文过短: {} 个字符", ctx, length);
            return Err(PipelineError::ContentTooShort {
                length,
                min: MIN_CONTENT_CHARS,
            });
        }
        info!("{} ✓ 提取正文 {} 个字符", ctx, length);
        debug!("{} 正文: {}", ctx, truncate_text(&full_text, 80));

        // ========== 4. 摘要 / 5. 注释 ==========
        let summary = self.summarizer.summarize(&full_text);
        let gloss = self.glossator.gloss(&summary);
        info!(
            "{} ✓ 摘要 {} 个字符，注释 {} 个词（未收录 {} 个）",
            ctx,
            summary.chars().count(),
            gloss.len(),
            gloss.untranslated_count()
        );

        let record = ResultRecord {
            url: ctx.url.clone(),
            summary,
            gloss,
        };

        // ========== 6. 后台持久化 ==========
        self.persist(&ctx, &record, full_text);

        Ok(record)
    }

    /// 两个存储各自在后台写入，互不影响，也不影响响应
    fn persist(&self, ctx: &RequestCtx, record: &ResultRecord, full_text: String) {
        let row = SummaryRow::from(record);
        let store = Arc::clone(&self.summary_store);
        let task_ctx = ctx.clone();
        tokio::spawn(async move {
            match store.save_summary(&row).await {
                Ok(()) => debug!("{} ✓ 摘要记录已保存", task_ctx),
                Err(e) => error!("{} ❌ 摘要记录保存失败: {}", task_ctx, e),
            }
        });

        let doc = BlogDocument::new(record.url.clone(), full_text);
        let store = Arc::clone(&self.document_store);
        let task_ctx = ctx.clone();
        tokio::spawn(async move {
            match store.save_document(&doc).await {
                Ok(()) => debug!("{} ✓ 全文已保存", task_ctx),
                Err(e) => error!("{} ❌ 全文保存失败: {}", task_ctx, e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(validate_url("https://example.com/blog/post").is_ok());
        assert!(validate_url("  http://example.com  ").is_ok());
    }

    #[test]
    fn test_validate_rejects_other_input() {
        for address in [
            "",
            "   ",
            "ftp://example.com",
            "example.com/blog",
            "httpfoo",
            "file:///etc/passwd",
            "javascript:alert(1)",
            "http://",
        ] {
            assert!(
                matches!(validate_url(address), Err(PipelineError::InvalidInput(_))),
                "应拒绝: {:?}",
                address
            );
        }
    }
}
