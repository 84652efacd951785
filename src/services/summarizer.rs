//! 摘要服务 - 业务能力层
//!
//! 只负责"取前几句"能力：纯位置选择，不改写任何内容

use crate::utils::normalize_whitespace;
use regex::Regex;
use std::sync::LazyLock;

/// 默认摘要句数
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// 句子边界：`.?!` 之后紧跟至少一个空白
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("SENTENCE_BOUNDARY should compile"));

/// 摘要服务
#[derive(Debug, Clone, Copy)]
pub struct Summarizer {
    max_sentences: usize,
}

impl Summarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    /// 取前 `max_sentences` 句，以单个空格连接
    pub fn summarize(&self, text: &str) -> String {
        let cleaned = normalize_whitespace(text);
        split_sentences(&cleaned)
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

/// 按边界规则切分句子，句末标点保留在句子内
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // 标点都是单字节字符
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
