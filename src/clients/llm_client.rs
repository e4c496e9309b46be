/// LLM API 客户端
///
/// 封装评论生成所用的 chat completion 调用
///
/// ## 技术栈
/// - 使用 `async-openai` crate 进行 API 调用
/// - 兼容 OpenAI API 的服务（如 Gemini 的 OpenAI 兼容端点）
use crate::clients::CommentaryBackend;
use crate::config::Config;
use crate::error::CommentaryError;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// LLM 客户端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
    timeout_secs: u64,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    ///
    /// 未配置凭证时返回 None，评论步骤随之关闭
    pub fn new(config: &Config) -> Option<Self> {
        let api_key = config.llm_api_key.as_deref()?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        Some(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            timeout_secs: config.request_timeout_secs,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn api_failed(&self, message: impl ToString) -> CommentaryError {
        CommentaryError::ApiCallFailed {
            model: self.model_name.clone(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CommentaryBackend for LlmClient {
    async fn generate(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> Result<String, CommentaryError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| self.api_failed(e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| self.api_failed(e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(1024u32)
            .build()
            .map_err(|e| self.api_failed(e))?;

        let chat = self.client.chat();
        let call = chat.create(request);
        let response = tokio::time::timeout(Duration::from_secs(self.timeout_secs), call)
            .await
            .map_err(|_| {
                warn!("LLM API 调用超时 ({} 秒)", self.timeout_secs);
                CommentaryError::Timeout {
                    secs: self.timeout_secs,
                }
            })?
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                self.api_failed(e)
            })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| CommentaryError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content)
    }
}
