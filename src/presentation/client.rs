/// 分析服务客户端
///
/// 展示层唯一的网络调用：submit(text) → AnalysisResponse
use crate::models::{AnalysisRequest, AnalysisResponse, AnalysisResponseBody, ErrorBody, ScoreSet};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 本地校验：输入为空，不发出请求
    #[error("Please enter some text to analyze.")]
    EmptyInput,
    /// 服务端返回错误
    #[error("{error}")]
    Server {
        status: u16,
        error: String,
        details: Option<String>,
    },
    /// 网络错误
    #[error("{0}")]
    Transport(String),
    /// 响应无法解析
    #[error("invalid response from server: {0}")]
    Malformed(String),
}

/// 分析服务客户端
pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    /// 创建客户端
    ///
    /// # 参数
    /// - `server_url`: 服务地址，例如 `http://localhost:3001`
    /// - `timeout_secs`: 请求超时（秒）
    pub fn new(server_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/analyze", server_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 提交文本并返回分析结果
    pub async fn submit(&self, text: &str) -> Result<AnalysisResponse, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        debug!("提交分析请求: {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalysisRequest::new(text))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &bytes));
        }

        parse_success_body(&bytes)
    }
}

/// 解析成功响应体
fn parse_success_body(bytes: &[u8]) -> Result<AnalysisResponse, ClientError> {
    let body: AnalysisResponseBody =
        serde_json::from_slice(bytes).map_err(|e| ClientError::Malformed(e.to_string()))?;
    let scores =
        ScoreSet::from_value(&body.scores).map_err(|e| ClientError::Malformed(e.to_string()))?;

    Ok(AnalysisResponse {
        scores,
        commentary: body.commentary,
    })
}

/// 解析错误响应体，不是 JSON 时退回到状态码
fn parse_error_body(status: u16, bytes: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorBody>(bytes) {
        Ok(body) => ClientError::Server {
            status,
            error: body.error,
            details: body.details,
        },
        Err(_) => ClientError::Server {
            status,
            error: format!("Request failed with status code {}", status),
            details: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_input_is_rejected_locally() {
        let client = AnalyzeClient::new("http://127.0.0.1:9", 1).unwrap();
        assert!(matches!(
            client.submit("   ").await,
            Err(ClientError::EmptyInput)
        ));
    }

    #[test]
    fn test_endpoint() {
        let client = AnalyzeClient::new("http://localhost:3001/", 5).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3001/analyze");
    }

    #[test]
    fn test_parse_success_body_both_versions() {
        let nested = json!({
            "scores": { "INSULT": { "summaryScore": { "value": 0.85 } } },
            "scoresVersion": "nested",
            "commentary": "Be kind."
        });
        let response = parse_success_body(nested.to_string().as_bytes()).unwrap();
        assert_eq!(response.scores.get(Attribute::Insult).unwrap().value, 0.85);
        assert_eq!(response.commentary.as_deref(), Some("Be kind."));

        let flat = json!({ "scores": { "INSULT": 0.85 }, "scoresVersion": "flat", "commentary": null });
        let response = parse_success_body(flat.to_string().as_bytes()).unwrap();
        assert_eq!(response.scores.get(Attribute::Insult).unwrap().value, 0.85);
        assert!(response.commentary.is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let err = parse_error_body(400, br#"{"error":"Text is required for analysis."}"#);
        assert_eq!(err.to_string(), "Text is required for analysis.");

        let err = parse_error_body(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }
}
