use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::models::attribute::Attribute;

/// 默认阈值
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// 阈值表
///
/// 属性 → 触发评论的最低分值。只有表中出现的属性才参与判断。
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    thresholds: BTreeMap<Attribute, f64>,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            thresholds: Attribute::ALL
                .iter()
                .map(|attribute| (*attribute, DEFAULT_THRESHOLD))
                .collect(),
        }
    }
}

impl ThresholdTable {
    /// 空表，不会触发任何评论
    pub fn empty() -> Self {
        Self {
            thresholds: BTreeMap::new(),
        }
    }

    /// 从 (属性, 阈值) 列表构建
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Attribute, f64)>,
    ) -> Result<Self, ConfigError> {
        let mut table = Self::empty();
        for (attribute, threshold) in entries {
            table.set(attribute, threshold)?;
        }
        Ok(table)
    }

    /// 设置单个属性的阈值
    pub fn set(&mut self, attribute: Attribute, threshold: f64) -> Result<(), ConfigError> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold {
                attribute: attribute.to_string(),
                value: threshold,
            });
        }
        self.thresholds.insert(attribute, threshold);
        Ok(())
    }

    pub fn get(&self, attribute: Attribute) -> Option<f64> {
        self.thresholds.get(&attribute).copied()
    }

    /// 按属性顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.thresholds.iter().map(|(a, t)| (*a, *t))
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl std::fmt::Display for ThresholdTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(attribute, threshold)| format!("{}≥{}", attribute, threshold))
            .collect();
        write!(f, "{}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_every_attribute() {
        let table = ThresholdTable::default();
        assert_eq!(table.len(), Attribute::ALL.len());
        for attribute in Attribute::ALL {
            assert_eq!(table.get(attribute), Some(DEFAULT_THRESHOLD));
        }
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let result = ThresholdTable::from_entries([(Attribute::Insult, 1.2)]);
        assert!(matches!(result, Err(ConfigError::InvalidThreshold { .. })));

        let result = ThresholdTable::from_entries([(Attribute::Insult, f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let table =
            ThresholdTable::from_entries([(Attribute::Toxicity, 0.5), (Attribute::Threat, 0.3)])
                .unwrap();
        assert_eq!(table.to_string(), "TOXICITY≥0.5, THREAT≥0.3");
    }
}
