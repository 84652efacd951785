use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 配置文件路径所在的环境变量
pub const CONFIG_PATH_ENV: &str = "BLOG_SUMMARISER_CONFIG";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务监听地址
    pub bind_addr: String,
    /// 抓取页面超时（秒）
    pub fetch_timeout_secs: u64,
    /// 中转代理地址，设置后通过 `<relay>?url=<地址>` 抓取
    pub relay_url: Option<String>,
    /// 抓取时使用的 User-Agent
    pub user_agent: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 摘要记录存储 (Supabase) ---
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub supabase_table: String,
    // --- 全文存储 ---
    /// JSON Lines 文件路径，未设置时不保存全文
    pub document_store_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            fetch_timeout_secs: 10,
            relay_url: None,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)".to_string(),
            verbose_logging: false,
            supabase_url: None,
            supabase_key: None,
            supabase_table: "summaries".to_string(),
            document_store_path: Some("blog_data.jsonl".to_string()),
        }
    }
}

impl Config {
    /// 默认配置 + 环境变量覆盖
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取可选的 TOML 配置文件，再应用环境变量覆盖
    pub fn load() -> Result<Self> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn with_env_overrides(self) -> Self {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            bind_addr: env("BIND_ADDR").unwrap_or(self.bind_addr),
            fetch_timeout_secs: env("FETCH_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(self.fetch_timeout_secs),
            relay_url: env("RELAY_URL").or(self.relay_url),
            user_agent: env("FETCH_USER_AGENT").unwrap_or(self.user_agent),
            verbose_logging: env("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            supabase_url: env("SUPABASE_URL").or(self.supabase_url),
            supabase_key: env("SUPABASE_KEY").or(self.supabase_key),
            supabase_table: env("SUPABASE_TABLE").unwrap_or(self.supabase_table),
            document_store_path: env("DOCUMENT_STORE_PATH").or(self.document_store_path),
        }
    }
}
