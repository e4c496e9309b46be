use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::attribute::Attribute;
use crate::models::score::{ScoreSet, ScoreSetVersion};

/// 分析请求（HTTP 请求体）
///
/// `text` 允许缺省，由处理器返回 400
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// 达到阈值的属性
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighScore {
    pub attribute: Attribute,
    pub value: f64,
}

impl HighScore {
    /// 保留三位小数
    pub fn formatted_value(&self) -> String {
        format!("{:.3}", self.value)
    }
}

/// 评论请求
///
/// 阈值判断的产物，包含原文与所有高分属性
#[derive(Debug, Clone, PartialEq)]
pub struct CommentaryRequest {
    pub text: String,
    pub high_scores: Vec<HighScore>,
}

/// 分析结果
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    /// 完整评分（不只是高分项）
    pub scores: ScoreSet,
    /// 仅在有属性达到阈值时存在
    pub commentary: Option<String>,
}

impl AnalysisResponse {
    /// 转换为 HTTP 响应体
    pub fn into_body(self, version: ScoreSetVersion) -> AnalysisResponseBody {
        AnalysisResponseBody {
            scores: self.scores.to_value(version),
            scores_version: version,
            commentary: self.commentary,
        }
    }
}

/// `POST /analyze` 成功响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponseBody {
    pub scores: Value,
    #[serde(default)]
    pub scores_version: ScoreSetVersion,
    pub commentary: Option<String>,
}

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_high_score_three_decimals() {
        let high = HighScore {
            attribute: Attribute::Toxicity,
            value: 0.91,
        };
        assert_eq!(high.formatted_value(), "0.910");

        let high = HighScore {
            attribute: Attribute::Insult,
            value: 0.85449,
        };
        assert_eq!(high.formatted_value(), "0.854");
    }

    #[test]
    fn test_request_without_text() {
        let request: AnalysisRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.text.is_none());
    }

    #[test]
    fn test_body_serialization() {
        let scores = ScoreSet::from_pairs([(Attribute::Threat, 0.1)]).unwrap();
        let response = AnalysisResponse {
            scores,
            commentary: None,
        };

        let body = serde_json::to_value(response.into_body(ScoreSetVersion::Flat)).unwrap();
        assert_eq!(
            body,
            json!({ "scores": { "THREAT": 0.1 }, "scoresVersion": "flat", "commentary": null })
        );
    }

    #[test]
    fn test_error_body_omits_missing_details() {
        let body = ErrorBody {
            error: "Text is required for analysis.".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "error": "Text is required for analysis." })
        );
    }
}
