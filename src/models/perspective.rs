//! Perspective API 线上格式

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::attribute::Attribute;

#[derive(Debug, Clone, Serialize)]
pub struct CommentText {
    pub text: String,
}

/// 每个请求属性对应一个空对象
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttributeOptions {}

/// `comments:analyze` 请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentRequest {
    pub comment: CommentText,
    pub languages: Vec<String>,
    pub requested_attributes: BTreeMap<String, AttributeOptions>,
}

impl AnalyzeCommentRequest {
    pub fn new(text: &str, languages: &[String], attributes: &[Attribute]) -> Self {
        Self {
            comment: CommentText {
                text: text.to_string(),
            },
            languages: languages.to_vec(),
            requested_attributes: attributes
                .iter()
                .map(|attribute| (attribute.as_str().to_string(), AttributeOptions::default()))
                .collect(),
        }
    }
}

/// `comments:analyze` 响应体
///
/// `attributeScores` 保留为原始 JSON，交给 `ScoreSet::from_value` 解析
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentResponse {
    #[serde(default)]
    pub attribute_scores: Value,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Google API 错误响应体
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorBody {
    pub error: GoogleErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
