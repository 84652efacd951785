//! 文本处理工具

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE should compile"));

/// 把所有空白折叠为单个空格并去掉首尾空白
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Hello \n\t world  "), "Hello world");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("یہ\u{a0} ایک"), "یہ ایک");
    }
}
