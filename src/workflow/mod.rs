pub mod request_ctx;
pub mod summarise_flow;

pub use request_ctx::RequestCtx;
pub use summarise_flow::{validate_url, SummariseFlow, MIN_CONTENT_CHARS};
