//! 逐词注释服务 - 业务能力层
//!
//! 只负责"查词典"能力：没有语法、屈折或上下文处理

use crate::models::{Dictionary, Gloss, GlossToken};

/// 逐词注释服务
///
/// 未收录的词保留原样并用方括号标记，例如 `library.` → `[library.]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Glossator {
    dictionary: Dictionary,
}

impl Glossator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// 按空白切词，逐个查词典
    pub fn gloss(&self, text: &str) -> Gloss {
        let tokens = text
            .split_whitespace()
            .map(|token| match self.dictionary.lookup(&lookup_key(token)) {
                Some(translated) => GlossToken::Translated(translated),
                None => GlossToken::Untranslated(token.to_string()),
            })
            .collect();

        Gloss { tokens }
    }
}

/// 查询键：转小写并去掉所有非 ASCII 字母
pub fn lookup_key(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
