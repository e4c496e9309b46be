//! 展示层
//!
//! 只负责提交文本和渲染结果，不包含业务规则

pub mod client;
pub mod render;

pub use client::{AnalyzeClient, ClientError};
pub use render::{format_score, render_error, render_response};
