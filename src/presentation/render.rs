//! 结果渲染
//!
//! 纯文本渲染：评分以百分比显示并附带属性说明，评论原样输出

use phf::phf_map;

use crate::models::AnalysisResponse;
use crate::presentation::client::ClientError;

/// 属性说明，按 API 属性名索引
static ATTRIBUTE_DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "TOXICITY" => "Overall aggressive or hateful content.",
    "SEVERE_TOXICITY" => "Extreme toxicity, particularly violent.",
    "INSULT" => "Use of insults or degrading language.",
    "PROFANITY" => "Vulgar or inappropriate language.",
    "THREAT" => "Content perceived as a threat.",
    "IDENTITY_ATTACK" => "Targeted attack on an identity (gender, origin, etc.).",
    "FLIRTATION" => "Romantic or seductive content.",
    "SEXUALLY_EXPLICIT" => "Sexually explicit content.",
};

const UNKNOWN_DESCRIPTION: &str = "Description not available";

const SCORE_NOTE: &str = "Note: scores indicate the probability that a reader would perceive \
    the message as containing the attribute. Definitions are contextual and may vary. Several \
    attributes should be considered together when assessing a harassment situation.";

/// 加载提示
pub const LOADING_MESSAGE: &str = "Analyzing...";

/// 属性说明
pub fn describe(attribute_name: &str) -> &'static str {
    ATTRIBUTE_DESCRIPTIONS
        .get(attribute_name)
        .copied()
        .unwrap_or(UNKNOWN_DESCRIPTION)
}

/// 分值格式化为百分比，保留两位小数
pub fn format_score(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// 渲染分析结果
pub fn render_response(response: &AnalysisResponse) -> String {
    let mut out = String::from("Analysis Results:\n");

    for score in response.scores.iter() {
        let name = score.attribute.as_str();
        out.push_str(&format!(
            "  {:<16} {:>8}  {}\n",
            name,
            format_score(score.value),
            describe(name)
        ));
    }

    out.push('\n');
    out.push_str(SCORE_NOTE);
    out.push('\n');

    if let Some(commentary) = &response.commentary {
        out.push_str("\nCommentary:\n");
        out.push_str(commentary);
        out.push('\n');
    }

    out
}

/// 渲染错误信息
pub fn render_error(err: &ClientError) -> String {
    match err {
        ClientError::EmptyInput => err.to_string(),
        other => format!("Analysis failed: {}", other),
    }
}
