//! 评分数据模型
//!
//! `ScoreSet` 的线上格式存在两个版本：
//! - `nested`（v1）：`{"TOXICITY": {"summaryScore": {"value": 0.91}}}`，即 Perspective 原生格式
//! - `flat`（v2）：`{"TOXICITY": 0.91}`
//!
//! 解析时两种格式都接受，序列化时由调用方显式指定版本。

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::ScoringError;
use crate::models::attribute::Attribute;

/// 单个属性的评分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeScore {
    pub attribute: Attribute,
    /// 取值范围 [0, 1]
    pub value: f64,
}

impl AttributeScore {
    /// 创建评分，值不在 [0, 1] 内时返回 None
    pub fn new(attribute: Attribute, value: f64) -> Option<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Some(Self { attribute, value })
        } else {
            None
        }
    }
}

/// ScoreSet 线上格式版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSetVersion {
    /// v1: Perspective 原生嵌套格式
    #[default]
    Nested,
    /// v2: 扁平格式
    Flat,
}

impl FromStr for ScoreSetVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested" | "v1" => Ok(ScoreSetVersion::Nested),
            "flat" | "v2" => Ok(ScoreSetVersion::Flat),
            other => Err(format!("未知的评分格式: {}", other)),
        }
    }
}

/// 一次请求的完整评分集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSet {
    scores: BTreeMap<Attribute, AttributeScore>,
}

#[derive(Debug, Deserialize)]
struct SummaryScore {
    value: f64,
}

/// 单个属性的线上格式，兼容两个版本
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireScore {
    Nested {
        #[serde(rename = "summaryScore")]
        summary_score: SummaryScore,
    },
    Flat(f64),
}

impl WireScore {
    fn value(&self) -> f64 {
        match self {
            WireScore::Nested { summary_score } => summary_score.value,
            WireScore::Flat(value) => *value,
        }
    }
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入评分，同一属性会被覆盖
    pub fn insert(&mut self, score: AttributeScore) {
        self.scores.insert(score.attribute, score);
    }

    pub fn get(&self, attribute: Attribute) -> Option<&AttributeScore> {
        self.scores.get(&attribute)
    }

    /// 按属性顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &AttributeScore> {
        self.scores.values()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// 从 (属性, 分值) 列表构建，分值越界时报错
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Attribute, f64)>,
    ) -> Result<Self, ScoringError> {
        let mut set = Self::new();
        for (attribute, value) in pairs {
            let score = AttributeScore::new(attribute, value).ok_or_else(|| {
                ScoringError::MalformedResponse(format!(
                    "属性 {} 的分值 {} 超出 [0, 1]",
                    attribute, value
                ))
            })?;
            set.insert(score);
        }
        Ok(set)
    }

    /// 从 JSON 解析（接受 nested 与 flat 两种格式）
    ///
    /// 未知属性名会被忽略
    pub fn from_value(value: &Value) -> Result<Self, ScoringError> {
        let entries = value.as_object().ok_or_else(|| {
            ScoringError::MalformedResponse("评分不是 JSON 对象".to_string())
        })?;

        let mut pairs = Vec::with_capacity(entries.len());
        for (name, raw) in entries {
            let Some(attribute) = Attribute::from_name(name) else {
                debug!("忽略未知属性: {}", name);
                continue;
            };
            let score = WireScore::deserialize(raw).map_err(|e| {
                ScoringError::MalformedResponse(format!("无法解析属性 {} 的评分: {}", name, e))
            })?;
            pairs.push((attribute, score.value()));
        }

        Self::from_pairs(pairs)
    }

    /// 按指定版本序列化为 JSON
    pub fn to_value(&self, version: ScoreSetVersion) -> Value {
        let mut map = Map::with_capacity(self.scores.len());
        for score in self.iter() {
            let entry = match version {
                ScoreSetVersion::Nested => json!({ "summaryScore": { "value": score.value } }),
                ScoreSetVersion::Flat => json!(score.value),
            };
            map.insert(score.attribute.as_str().to_string(), entry);
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_shape() {
        let value = json!({
            "TOXICITY": { "summaryScore": { "value": 0.91, "type": "PROBABILITY" }, "spanScores": [] },
            "INSULT": { "summaryScore": { "value": 0.85 } }
        });

        let set = ScoreSet::from_value(&value).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(Attribute::Toxicity).unwrap().value, 0.91);
        assert_eq!(set.get(Attribute::Insult).unwrap().value, 0.85);
    }

    #[test]
    fn test_parse_flat_shape() {
        let value = json!({ "THREAT": 0.1, "PROFANITY": 0.2 });

        let set = ScoreSet::from_value(&value).unwrap();
        assert_eq!(set.get(Attribute::Threat).unwrap().value, 0.1);
        assert_eq!(set.get(Attribute::Profanity).unwrap().value, 0.2);
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let value = json!({ "FLIRTATION": 0.7, "TOXICITY": 0.3 });

        let set = ScoreSet::from_value(&value).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get(Attribute::Toxicity).is_some());
    }

    #[test]
    fn test_unknown_attribute_with_unexpected_shape_is_ignored() {
        let value = json!({
            "TOXICITY": { "summaryScore": { "value": 0.9 } },
            "SPAM": { "spanScores": [] }
        });

        let set = ScoreSet::from_value(&value).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Attribute::Toxicity).unwrap().value, 0.9);
    }

    #[test]
    fn test_known_attribute_with_unexpected_shape_is_rejected() {
        let value = json!({ "TOXICITY": { "spanScores": [] } });
        assert!(matches!(
            ScoreSet::from_value(&value),
            Err(ScoringError::MalformedResponse(_))
        ));
        assert!(matches!(
            ScoreSet::from_value(&Value::Null),
            Err(ScoringError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let value = json!({ "TOXICITY": 1.5 });
        assert!(matches!(
            ScoreSet::from_value(&value),
            Err(ScoringError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_to_value_respects_version() {
        let set = ScoreSet::from_pairs([(Attribute::Insult, 0.85)]).unwrap();

        assert_eq!(
            set.to_value(ScoreSetVersion::Nested),
            json!({ "INSULT": { "summaryScore": { "value": 0.85 } } })
        );
        assert_eq!(set.to_value(ScoreSetVersion::Flat), json!({ "INSULT": 0.85 }));
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("nested".parse::<ScoreSetVersion>(), Ok(ScoreSetVersion::Nested));
        assert_eq!("V2".parse::<ScoreSetVersion>(), Ok(ScoreSetVersion::Flat));
        assert!("tree".parse::<ScoreSetVersion>().is_err());
    }
}
