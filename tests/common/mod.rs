//! 测试替身：可计数的抓取器和存储

#![allow(dead_code)]

use async_trait::async_trait;
use blog_summariser::error::{FetchError, StoreError};
use blog_summariser::infrastructure::PageFetcher;
use blog_summariser::models::{BlogDocument, SummaryRow};
use blog_summariser::services::{DocumentStore, SummaryStore};
use blog_summariser::SummariseFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub const ARTICLE_HTML: &str = "<html><body><nav>Home About</nav><article><p>React is a library. It simplifies development. You can use it with hooks. Extra sentence ignored.</p></article></body></html>";

/// 返回固定页面的抓取器，`html` 为 None 时模拟超时
pub struct StubFetcher {
    html: Option<String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn html(html: &str) -> Arc<Self> {
        Arc::new(Self {
            html: Some(html.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn timeout() -> Arc<Self> {
        Arc::new(Self {
            html: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.html {
            Some(html) => Ok(html.clone()),
            None => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
        }
    }
}

/// 抓取时直接 panic 的抓取器
pub struct PanickingFetcher {
    pub message: &'static str,
}

#[async_trait]
impl PageFetcher for PanickingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        panic!("{}", self.message);
    }
}

/// 记录写入内容的摘要存储，可配置为总是失败
#[derive(Default)]
pub struct RecordingSummaryStore {
    pub fail: bool,
    pub rows: Mutex<Vec<SummaryRow>>,
    attempts: AtomicUsize,
    saved: Notify,
}

impl RecordingSummaryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// 成功写入的条数
    pub fn calls(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// 等待一次写入，超时返回 false
    pub async fn wait_saved(&self) -> bool {
        tokio::time::timeout(Duration::from_secs(2), self.saved.notified())
            .await
            .is_ok()
    }
}

#[async_trait]
impl SummaryStore for RecordingSummaryStore {
    async fn save_summary(&self, row: &SummaryRow) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            self.saved.notify_one();
            return Err(StoreError::Status {
                status: 503,
                body: "summary store unavailable".to_string(),
            });
        }
        self.rows.lock().unwrap().push(row.clone());
        self.saved.notify_one();
        Ok(())
    }
}

/// 记录写入内容的全文存储，可配置为总是失败
#[derive(Default)]
pub struct RecordingDocumentStore {
    pub fail: bool,
    pub docs: Mutex<Vec<BlogDocument>>,
    attempts: AtomicUsize,
    attempted: Notify,
}

impl RecordingDocumentStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub async fn wait_attempted(&self) -> bool {
        tokio::time::timeout(Duration::from_secs(2), self.attempted.notified())
            .await
            .is_ok()
    }
}

#[async_trait]
impl DocumentStore for RecordingDocumentStore {
    async fn save_document(&self, doc: &BlogDocument) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.attempted.notify_one();
        if self.fail {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "document store unavailable",
            )));
        }
        self.docs.lock().unwrap().push(doc.clone());
        Ok(())
    }
}

/// 测试用流程及其替身
pub struct Harness {
    pub fetcher: Arc<StubFetcher>,
    pub summaries: Arc<RecordingSummaryStore>,
    pub documents: Arc<RecordingDocumentStore>,
}

impl Harness {
    pub fn new(fetcher: Arc<StubFetcher>, documents: RecordingDocumentStore) -> Self {
        Self {
            fetcher,
            summaries: Arc::new(RecordingSummaryStore::default()),
            documents: Arc::new(documents),
        }
    }

    pub fn with_summary_store(mut self, summaries: RecordingSummaryStore) -> Self {
        self.summaries = Arc::new(summaries);
        self
    }

    pub fn flow(&self) -> SummariseFlow {
        SummariseFlow::new(
            self.fetcher.clone(),
            self.summaries.clone(),
            self.documents.clone(),
        )
    }

    /// 让后台任务有机会运行
    pub async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
