//! 流水线数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 注释中的单个词
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossToken {
    /// 词典命中
    Translated(&'static str),
    /// 未命中，保留原始词（含标点）
    Untranslated(String),
}

impl fmt::Display for GlossToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossToken::Translated(value) => f.write_str(value),
            GlossToken::Untranslated(original) => write!(f, "[{}]", original),
        }
    }
}

/// 逐词注释，顺序与输入一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gloss {
    pub tokens: Vec<GlossToken>,
}

impl Gloss {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 未翻译的词数
    pub fn untranslated_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, GlossToken::Untranslated(_)))
            .count()
    }
}

impl fmt::Display for Gloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// 一次成功运行的结果
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub url: String,
    pub summary: String,
    pub gloss: Gloss,
}

/// 写入摘要记录存储的行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub url: String,
    pub summary: String,
    pub urdu: String,
}

impl From<&ResultRecord> for SummaryRow {
    fn from(record: &ResultRecord) -> Self {
        Self {
            url: record.url.clone(),
            summary: record.summary.clone(),
            urdu: record.gloss.to_string(),
        }
    }
}

/// 写入全文存储的文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDocument {
    pub url: String,
    pub full_text: String,
    pub created_at: DateTime<Utc>,
}

impl BlogDocument {
    pub fn new(url: impl Into<String>, full_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            full_text: full_text.into(),
            created_at: Utc::now(),
        }
    }
}

/// `POST /api/summarise` 请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummariseRequest {
    #[serde(default)]
    pub url: String,
}

/// `POST /api/summarise` 成功响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummariseResponse {
    pub summary: String,
    pub urdu: String,
}

impl From<&ResultRecord> for SummariseResponse {
    fn from(record: &ResultRecord) -> Self {
        Self {
            summary: record.summary.clone(),
            urdu: record.gloss.to_string(),
        }
    }
}

/// 失败响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
