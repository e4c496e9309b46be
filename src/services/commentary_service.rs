//! 评论服务 - 业务能力层
//!
//! 只负责"根据高分属性生成评论"能力
//!
//! 调用失败不会向上传播：结果总会被转换为评论文本或固定占位文本

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::{CommentaryBackend, LlmClient};
use crate::config::Config;
use crate::error::CommentaryError;
use crate::models::CommentaryRequest;

/// 评论服务失败时返回的占位文本
pub const COMMENTARY_FAILURE_PLACEHOLDER: &str =
    "Commentary could not be generated at this time. The scores above are still valid.";

const SYSTEM_MESSAGE: &str = "You are an empathetic assistant helping people who may be \
    experiencing cyberbullying. You explain calmly and kindly why a message can be hurtful, \
    and you offer practical, supportive advice. You never insult anyone and never repeat \
    slurs beyond what is needed to explain.";

/// 评论服务
///
/// 后端为 None 表示评论凭证缺失，评论步骤被关闭
pub struct CommentaryService {
    backend: Option<Arc<dyn CommentaryBackend>>,
}

impl CommentaryService {
    /// 根据配置创建评论服务
    pub fn new(config: &Config) -> Self {
        let backend = LlmClient::new(config).map(|client| Arc::new(client) as Arc<dyn CommentaryBackend>);
        Self::with_backend(backend)
    }

    /// 使用指定后端创建评论服务
    pub fn with_backend(backend: Option<Arc<dyn CommentaryBackend>>) -> Self {
        Self { backend }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// 生成评论
    ///
    /// - 未配置后端：返回 None，不发出调用
    /// - 调用成功：返回评论文本
    /// - 调用失败：返回占位文本
    pub async fn comment(&self, request: &CommentaryRequest) -> Option<String> {
        let Some(backend) = self.backend.as_ref() else {
            warn!("⚠️ 有属性超过阈值，但评论服务未配置，跳过评论生成");
            return None;
        };

        let (user_message, system_message) = build_commentary_messages(request);
        let outcome = backend.generate(&user_message, Some(&system_message)).await;

        Some(resolve_outcome(outcome))
    }
}

/// 把评论调用结果转换为最终文本
pub fn resolve_outcome(outcome: Result<String, CommentaryError>) -> String {
    match outcome {
        Ok(text) => {
            info!("✓ 评论生成成功，长度: {} 字符", text.chars().count());
            text
        }
        Err(e) => {
            warn!("⚠️ 评论生成失败，使用占位文本: {}", e);
            COMMENTARY_FAILURE_PLACEHOLDER.to_string()
        }
    }
}

/// 构建评论提示词
///
/// 返回 (user_message, system_message)
pub fn build_commentary_messages(request: &CommentaryRequest) -> (String, String) {
    let high_scores = request
        .high_scores
        .iter()
        .map(|high| format!("- {}: {}", high.attribute, high.formatted_value()))
        .collect::<Vec<_>>()
        .join("\n");

    let user_message = format!(
        r#"The following message was flagged by an automated toxicity analysis.

Message:
"{}"

Attributes that reached their alert threshold (score from 0 to 1):
{}

Please:
1. Explain briefly why this message may be perceived as hurtful or harmful.
2. Suggest how the person who received it could respond or protect themselves.
3. If the content suggests a threat to someone's safety, recommend contacting a trusted adult or the relevant authorities.

Keep the answer short, warm and non-judgmental. Use plain text with line breaks, no markdown headings."#,
        request.text, high_scores
    );

    (user_message, SYSTEM_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, HighScore};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingBackend {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CommentaryBackend for FailingBackend {
        async fn generate(
            &self,
            _user_message: &str,
            _system_message: Option<&str>,
        ) -> Result<String, CommentaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CommentaryError::ApiCallFailed {
                model: "test-model".to_string(),
                message: "503 Service Unavailable".to_string(),
            })
        }
    }

    fn sample_request() -> CommentaryRequest {
        CommentaryRequest {
            text: "I hate you, you are worthless".to_string(),
            high_scores: vec![
                HighScore {
                    attribute: Attribute::Toxicity,
                    value: 0.91,
                },
                HighScore {
                    attribute: Attribute::Insult,
                    value: 0.85,
                },
            ],
        }
    }

    #[test]
    fn test_prompt_embeds_text_and_high_scores() {
        let (user_message, system_message) = build_commentary_messages(&sample_request());

        assert!(user_message.contains("\"I hate you, you are worthless\""));
        assert!(user_message.contains("- TOXICITY: 0.910"));
        assert!(user_message.contains("- INSULT: 0.850"));
        assert!(system_message.contains("cyberbullying"));
    }

    #[test]
    fn test_resolve_outcome() {
        assert_eq!(resolve_outcome(Ok("be kind".to_string())), "be kind");
        assert_eq!(
            resolve_outcome(Err(CommentaryError::Timeout { secs: 30 })),
            COMMENTARY_FAILURE_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn test_failure_becomes_placeholder() {
        let backend = Arc::new(FailingBackend {
            calls: AtomicUsize::new(0),
        });
        let service = CommentaryService::with_backend(Some(backend.clone() as Arc<dyn CommentaryBackend>));

        let commentary = service.comment(&sample_request()).await;

        assert_eq!(commentary.as_deref(), Some(COMMENTARY_FAILURE_PLACEHOLDER));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disabled_service_returns_none() {
        let service = CommentaryService::with_backend(None);
        assert!(!service.is_enabled());
        assert!(service.comment(&sample_request()).await.is_none());
    }
}
