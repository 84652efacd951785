//! 页面抓取器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"抓取一个地址"的能力

use crate::config::Config;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// 页面抓取能力
///
/// 职责：
/// - 一次请求，不重试
/// - 不认识正文 / 摘要
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取地址对应的原始页面
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 基于 reqwest 的抓取器
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
    relay_url: Option<Url>,
}

impl HttpFetcher {
    /// 根据配置创建抓取器
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        let relay_url = config
            .relay_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| anyhow::anyhow!("中转代理地址不合法: {}", e))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            relay_url,
        })
    }

    /// 实际请求的地址：直连或经过中转代理
    pub fn request_url(&self, url: &str) -> String {
        match &self.relay_url {
            Some(relay) => {
                let mut target = relay.clone();
                target.query_pairs_mut().append_pair("url", url);
                target.to_string()
            }
            None => url.to_string(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = self.request_url(url);
        debug!("抓取页面: {}", target);

        let response = self
            .client
            .get(&target)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "text/html")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        if html.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        debug!("抓取完成: {} 字节", html.len());
        Ok(html)
    }
}
