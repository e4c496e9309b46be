//! 外部服务客户端
//!
//! 两个 trait 是编排流程与外部服务之间的接缝，测试中可替换为内存实现

#[cfg(test)]
pub(crate) mod fakes;
pub mod llm_client;
pub mod perspective_client;

use async_trait::async_trait;

use crate::error::{CommentaryError, ScoringError};
use crate::models::{Attribute, ScoreSet};

pub use llm_client::LlmClient;
pub use perspective_client::PerspectiveClient;

/// 评分后端
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    /// 对一段文本评分，返回请求属性的完整评分集合
    async fn score(
        &self,
        text: &str,
        languages: &[String],
        attributes: &[Attribute],
    ) -> Result<ScoreSet, ScoringError>;
}

/// 评论后端
#[async_trait]
pub trait CommentaryBackend: Send + Sync {
    /// 单次生成调用
    async fn generate(&self, user_message: &str, system_message: Option<&str>)
        -> Result<String, CommentaryError>;
}
