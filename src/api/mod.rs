//! API 模块
//!
//! 负责对外的 HTTP 接口

pub mod routes;

pub use routes::{create_router, AppState};
