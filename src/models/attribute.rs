/// 毒性属性枚举
///
/// 与 Perspective API 的属性名一一对应，序列化时使用大写下划线形式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    /// 整体毒性
    Toxicity,
    /// 严重毒性
    SevereToxicity,
    /// 身份攻击
    IdentityAttack,
    /// 侮辱
    Insult,
    /// 脏话
    Profanity,
    /// 威胁
    Threat,
}

impl Attribute {
    /// 每次请求都会向评分服务索取的属性
    pub const ALL: [Attribute; 6] = [
        Attribute::Toxicity,
        Attribute::SevereToxicity,
        Attribute::IdentityAttack,
        Attribute::Insult,
        Attribute::Profanity,
        Attribute::Threat,
    ];

    /// 获取 API 属性名
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Toxicity => "TOXICITY",
            Attribute::SevereToxicity => "SEVERE_TOXICITY",
            Attribute::IdentityAttack => "IDENTITY_ATTACK",
            Attribute::Insult => "INSULT",
            Attribute::Profanity => "PROFANITY",
            Attribute::Threat => "THREAT",
        }
    }

    /// 从 API 属性名解析
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "TOXICITY" => Some(Attribute::Toxicity),
            "SEVERE_TOXICITY" => Some(Attribute::SevereToxicity),
            "IDENTITY_ATTACK" => Some(Attribute::IdentityAttack),
            "INSULT" => Some(Attribute::Insult),
            "PROFANITY" => Some(Attribute::Profanity),
            "THREAT" => Some(Attribute::Threat),
            _ => None,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip_for_all_attributes() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.as_str()), Some(attribute));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Attribute::from_name("FLIRTATION"), None);
        assert_eq!(Attribute::from_name("toxicity"), None);
    }

    #[test]
    fn test_serde_uses_api_names() {
        let json = serde_json::to_string(&Attribute::SevereToxicity).unwrap();
        assert_eq!(json, "\"SEVERE_TOXICITY\"");
    }
}
