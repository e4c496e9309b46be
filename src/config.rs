use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::ScoreSetVersion;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- 评分服务（Perspective）配置 ---
    /// 缺失时每个请求都会失败
    pub perspective_api_key: Option<String>,
    pub perspective_api_url: String,
    /// 传给评分服务的语言提示
    pub languages: Vec<String>,
    // --- 评论服务（LLM）配置 ---
    /// 缺失时只关闭评论步骤
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- 服务配置 ---
    pub bind_host: String,
    pub port: u16,
    /// 响应中评分的格式版本
    pub scores_version: ScoreSetVersion,
    /// 阈值文件路径，未设置时使用默认阈值表
    pub thresholds_file: Option<String>,
    /// 外部调用超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 允许跨域访问的来源，为空时允许任意来源
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            perspective_api_key: None,
            perspective_api_url:
                "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze".to_string(),
            languages: vec!["en".to_string()],
            llm_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            llm_model_name: "gemini-2.0-flash".to_string(),
            bind_host: "0.0.0.0".to_string(),
            port: 3001,
            scores_version: ScoreSetVersion::Nested,
            thresholds_file: None,
            request_timeout_secs: 30,
            verbose_logging: false,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    ///
    /// 已设置但无法解析的数值或开关项返回 `EnvVarParseFailed`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Ok(Self {
            perspective_api_key: var("PERSPECTIVE_API_KEY"),
            perspective_api_url: var("PERSPECTIVE_API_URL").unwrap_or(default.perspective_api_url),
            languages: var("ANALYSIS_LANGUAGES").map(|v| parse_list(&v, true)).filter(|v| !v.is_empty()).unwrap_or(default.languages),
            llm_api_key: var("GEMINI_API_KEY").or_else(|| var("LLM_API_KEY")),
            llm_api_base_url: var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            bind_host: var("BIND_HOST").unwrap_or(default.bind_host),
            port: parse_var("PORT", var("PORT"), "u16")?.unwrap_or(default.port),
            scores_version: parse_var("SCORES_FORMAT", var("SCORES_FORMAT"), "nested|flat")?.unwrap_or(default.scores_version),
            thresholds_file: var("THRESHOLDS_FILE"),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), "u64")?.unwrap_or(default.request_timeout_secs),
            verbose_logging: parse_var("VERBOSE_LOGGING", var("VERBOSE_LOGGING"), "bool")?.unwrap_or(default.verbose_logging),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS").map(|v| parse_list(&v, false)).unwrap_or(default.cors_allowed_origins),
        })
    }

    /// 监听地址
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// 评分凭证，缺失时返回配置错误
    pub fn require_perspective_key(&self) -> Result<&str, ConfigError> {
        self.perspective_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingCredential {
                var_name: "PERSPECTIVE_API_KEY".to_string(),
            })
    }

    /// 是否启用评论服务
    pub fn commentary_enabled(&self) -> bool {
        self.llm_api_key.is_some()
    }
}

/// 解析已设置的变量，失败时带上变量名和原值
fn parse_var<T: FromStr>(
    var_name: &str,
    value: Option<String>,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        }),
    }
}

/// 解析逗号分隔的列表，空项被丢弃
fn parse_list(value: &str, lowercase: bool) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| if lowercase { item.to_lowercase() } else { item.to_string() })
        .collect()
}
