use thiserror::Error;

/// 流水线错误类型
///
/// 每个变体对应一个对外的 HTTP 状态码和一条可公开的提示信息，
/// 内部细节只进入日志。
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 地址格式不合法（调用方错误）
    #[error("地址不合法: {0}")]
    InvalidInput(String),
    /// 抓取页面失败（上游不可达或超时）
    #[error("抓取失败: {0}")]
    Fetch(#[from] FetchError),
    /// 提取出的正文太短
    #[error("正文过短: {length} 个字符 (最少 {min})")]
    ContentTooShort { length: usize, min: usize },
    /// 其他未分类错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl PipelineError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            PipelineError::InvalidInput(_) | PipelineError::ContentTooShort { .. } => 400,
            PipelineError::Fetch(_) | PipelineError::Internal(_) => 500,
        }
    }

    /// 返回给调用方的提示信息
    pub fn public_message(&self) -> &'static str {
        match self {
            PipelineError::InvalidInput(_) => "Invalid URL",
            PipelineError::ContentTooShort { .. } => "Blog content is too short.",
            PipelineError::Fetch(_) => "Failed to fetch the blog.",
            PipelineError::Internal(_) => "Failed to summarize the blog.",
        }
    }
}

/// 页面抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求超时
    #[error("请求超时: {url}")]
    Timeout { url: String },
    /// 网络请求失败
    #[error("请求失败 ({url}): {message}")]
    Request { url: String, message: String },
    /// 上游返回非 2xx 状态
    #[error("上游返回 HTTP {status}: {url}")]
    Status { url: String, status: u16 },
    /// 上游返回空内容
    #[error("上游返回空内容: {url}")]
    EmptyBody { url: String },
}

impl FetchError {
    /// 从 reqwest 错误转换，保留原始错误信息
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// 持久化错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 网络请求失败
    #[error("存储请求失败: {0}")]
    Request(#[from] reqwest::Error),
    /// 存储服务返回错误响应
    #[error("存储服务返回 HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 文件写入失败
    #[error("写入文件失败: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化失败
    #[error("序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ========== Result 类型别名 ==========

/// 流水线结果类型
pub type PipelineResult<T> = Result<T, PipelineError>;
