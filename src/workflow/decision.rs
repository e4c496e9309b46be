//! 阈值判断
//!
//! 纯函数：评分集合 + 阈值表 → 是否需要评论

use crate::models::{CommentaryRequest, HighScore, ScoreSet, ThresholdTable};

/// 根据阈值表判断是否需要生成评论
///
/// 阈值表中每个属性若在评分集合中存在且分值 ≥ 阈值，就记为高分项。
/// 至少有一个高分项时返回评论请求，否则返回 None。
pub fn decide_commentary(
    scores: &ScoreSet,
    thresholds: &ThresholdTable,
    text: &str,
) -> Option<CommentaryRequest> {
    let high_scores: Vec<HighScore> = thresholds
        .iter()
        .filter_map(|(attribute, threshold)| {
            let score = scores.get(attribute)?;
            (score.value >= threshold).then_some(HighScore {
                attribute,
                value: score.value,
            })
        })
        .collect();

    if high_scores.is_empty() {
        return None;
    }

    Some(CommentaryRequest {
        text: text.to_string(),
        high_scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    #[test]
    fn test_all_below_threshold() {
        let scores = ScoreSet::from_pairs([
            (Attribute::Toxicity, 0.02),
            (Attribute::Insult, 0.01),
            (Attribute::Threat, 0.49),
        ])
        .unwrap();

        assert!(decide_commentary(&scores, &ThresholdTable::default(), "Have a nice day").is_none());
    }

    #[test]
    fn test_collects_every_high_score_in_order() {
        let scores = ScoreSet::from_pairs([
            (Attribute::Toxicity, 0.91),
            (Attribute::Insult, 0.85),
            (Attribute::Threat, 0.1),
        ])
        .unwrap();

        let request =
            decide_commentary(&scores, &ThresholdTable::default(), "I hate you, you are worthless")
                .unwrap();

        let attributes: Vec<Attribute> = request.high_scores.iter().map(|h| h.attribute).collect();
        assert_eq!(attributes, vec![Attribute::Toxicity, Attribute::Insult]);
        assert_eq!(request.text, "I hate you, you are worthless");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let scores = ScoreSet::from_pairs([(Attribute::Profanity, 0.5)]).unwrap();
        let request = decide_commentary(&scores, &ThresholdTable::default(), "text").unwrap();
        assert_eq!(request.high_scores.len(), 1);
    }

    #[test]
    fn test_only_table_attributes_are_checked() {
        let scores = ScoreSet::from_pairs([(Attribute::Threat, 0.99)]).unwrap();
        let thresholds = ThresholdTable::from_entries([(Attribute::Toxicity, 0.5)]).unwrap();

        assert!(decide_commentary(&scores, &thresholds, "text").is_none());
    }

    #[test]
    fn test_custom_threshold() {
        let scores = ScoreSet::from_pairs([(Attribute::Insult, 0.6)]).unwrap();
        let strict = ThresholdTable::from_entries([(Attribute::Insult, 0.7)]).unwrap();
        let lenient = ThresholdTable::from_entries([(Attribute::Insult, 0.3)]).unwrap();

        assert!(decide_commentary(&scores, &strict, "text").is_none());
        assert!(decide_commentary(&scores, &lenient, "text").is_some());
    }
}
