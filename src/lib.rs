//! # Blog Summariser
//!
//! 抓取网页、提取正文、取前三句作为摘要，并逐词查词典生成乌尔都语注释
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端，只暴露抓取能力
//! - `HttpFetcher` - 直连或经中转代理抓取页面，带超时
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务都是输入的纯函数
//! - `ContentExtractor` - 正文提取
//! - `Summarizer` - 前三句摘要
//! - `Glossator` - 逐词注释
//! - `SummaryStore` / `DocumentStore` - 两个只写存储
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个地址"的完整处理流程
//! - `SummariseFlow` - 校验 → 抓取 → 提取 → 摘要 → 注释 → 后台持久化
//!
//! ### ④ 接口层（API）
//! - `api/` - `POST /api/summarise` 与 `GET /health`
//! - `App` - 启动时组装依赖并启动服务

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{build_flow, App};
pub use config::Config;
pub use error::{FetchError, PipelineError, PipelineResult, StoreError};
pub use models::{Dictionary, Gloss, GlossToken, ResultRecord};
pub use workflow::{RequestCtx, SummariseFlow};
