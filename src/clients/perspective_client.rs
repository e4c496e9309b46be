/// Perspective API 客户端
///
/// 封装 `comments:analyze` 调用，只负责一次请求，不做重试
use crate::clients::ScoringBackend;
use crate::config::Config;
use crate::error::ScoringError;
use crate::models::perspective::{AnalyzeCommentRequest, AnalyzeCommentResponse, GoogleErrorBody};
use crate::models::{Attribute, ScoreSet};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Perspective API 客户端
pub struct PerspectiveClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl PerspectiveClient {
    /// 创建新的 Perspective 客户端
    ///
    /// 凭证缺失时返回配置错误
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.require_perspective_key()?.to_string();
        Self::with_endpoint(
            &config.perspective_api_url,
            api_key,
            config.request_timeout_secs,
        )
    }

    /// 使用自定义端点创建客户端
    pub fn with_endpoint(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout_secs,
        })
    }

    /// 把传输层错误转换为评分错误
    fn map_transport_error(&self, err: reqwest::Error) -> ScoringError {
        if err.is_timeout() {
            return ScoringError::Timeout {
                secs: self.timeout_secs,
            };
        }
        ScoringError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl ScoringBackend for PerspectiveClient {
    async fn score(
        &self,
        text: &str,
        languages: &[String],
        attributes: &[Attribute],
    ) -> Result<ScoreSet, ScoringError> {
        let request = AnalyzeCommentRequest::new(text, languages, attributes);

        debug!(
            "调用 Perspective API，属性数量: {}，语言: {:?}",
            attributes.len(),
            languages
        );

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!("Perspective API 返回错误: {} {}", status.as_u16(), message);
            return Err(ScoringError::RequestFailed {
                status: Some(status.as_u16()),
                message,
            });
        }

        let payload: AnalyzeCommentResponse = response
            .json()
            .await
            .map_err(|e| ScoringError::MalformedResponse(e.to_string()))?;

        debug!("Perspective API 调用成功，检测语言: {:?}", payload.languages);

        ScoreSet::from_value(&payload.attribute_scores)
    }
}

/// 从 Google 错误响应体中提取错误信息
///
/// 响应体不是 JSON 时退回到原始文本
fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<GoogleErrorBody>(body) {
        if let Some(message) = parsed.error.message.filter(|m| !m.is_empty()) {
            return Some(message);
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
