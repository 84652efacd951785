//! 请求处理上下文
//!
//! 封装"我正在处理哪个请求、哪个地址"这一信息

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// 请求处理上下文（仅用于日志）
#[derive(Debug, Clone)]
pub struct RequestCtx {
    /// 进程内递增的请求编号
    pub request_id: u64,
    /// 用户提交的地址
    pub url: String,
}

impl RequestCtx {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request_id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            url: url.into(),
        }
    }
}

impl Display for RequestCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[请求 #{}]", self.request_id)
    }
}
