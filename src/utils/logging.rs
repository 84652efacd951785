//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 博客摘要服务");
    info!("⏱️ 抓取超时: {} 秒", config.fetch_timeout_secs);
    match &config.relay_url {
        Some(relay) => info!("🔀 中转代理: {}", relay),
        None => info!("🔀 中转代理: 未启用"),
    }
    info!(
        "💾 摘要存储: {} | 全文存储: {}",
        if config.supabase_url.is_some() { "Supabase" } else { "未启用" },
        config.document_store_path.as_deref().unwrap_or("未启用")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
