use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文本为空（调用方错误）
    #[error("输入错误: {0}")]
    InvalidInput(String),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 评分服务错误
    #[error("评分服务错误: {0}")]
    Scoring(#[from] ScoringError),
    /// 评论服务错误（流程内会被降级为占位文本，不会向上传播）
    #[error("评论服务错误: {0}")]
    Commentary(#[from] CommentaryError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的凭证不存在
    #[error("环境变量 {var_name} 不存在")]
    MissingCredential { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 阈值超出 [0, 1]
    #[error("属性 {attribute} 的阈值 {value} 超出范围 [0, 1]")]
    InvalidThreshold { attribute: String, value: f64 },
}

/// 评分服务错误
#[derive(Debug, Error)]
pub enum ScoringError {
    /// 请求失败，`status` 为上游 HTTP 状态码（如有）
    #[error("评分请求失败 (status={status:?}): {message}")]
    RequestFailed { status: Option<u16>, message: String },
    /// 请求超时
    #[error("评分请求超时 ({secs} 秒)")]
    Timeout { secs: u64 },
    /// 响应无法解析
    #[error("评分响应格式错误: {0}")]
    MalformedResponse(String),
}

/// 评论服务错误
#[derive(Debug, Error)]
pub enum CommentaryError {
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 请求超时
    #[error("LLM请求超时 ({secs} 秒)")]
    Timeout { secs: u64 },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建输入错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// 创建凭证缺失错误
    pub fn missing_credential(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::MissingCredential {
            var_name: var_name.into(),
        })
    }

    /// 创建评分失败错误
    pub fn scoring_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Scoring(ScoringError::RequestFailed {
            status,
            message: message.into(),
        })
    }

    /// 对应的 HTTP 状态码
    ///
    /// 评分失败时转发上游状态码，没有则为 500
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::Scoring(ScoringError::RequestFailed {
                status: Some(status),
                ..
            }) if (100..=999).contains(status) => *status,
            AppError::Config(_) | AppError::Scoring(_) | AppError::Commentary(_) => 500,
        }
    }

    /// 返回给调用方的错误摘要
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "Text is required for analysis.",
            AppError::Config(_) => "Server configuration error: API key missing.",
            AppError::Scoring(_) => "Failed to analyze text with Perspective API.",
            AppError::Commentary(_) => "Failed to generate commentary.",
        }
    }

    /// 返回给调用方的错误详情
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::InvalidInput(_) => None,
            AppError::Scoring(ScoringError::RequestFailed { message, .. }) => {
                Some(message.clone())
            }
            other => Some(other.to_string()),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
