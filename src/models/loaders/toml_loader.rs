use crate::models::attribute::Attribute;
use crate::models::thresholds::ThresholdTable;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// 阈值文件结构
///
/// ```toml
/// [thresholds]
/// TOXICITY = 0.5
/// INSULT = 0.6
/// ```
#[derive(Debug, Deserialize)]
struct ThresholdFile {
    thresholds: BTreeMap<String, f64>,
}

/// 从 TOML 文件加载阈值表
pub async fn load_threshold_table(toml_file_path: &Path) -> Result<ThresholdTable> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取阈值文件: {}", toml_file_path.display()))?;

    parse_threshold_table(&content)
        .with_context(|| format!("无法解析阈值文件: {}", toml_file_path.display()))
}

/// 解析阈值表 TOML 内容
pub fn parse_threshold_table(content: &str) -> Result<ThresholdTable> {
    let file: ThresholdFile = toml::from_str(content)?;

    let mut table = ThresholdTable::empty();
    for (name, threshold) in file.thresholds {
        let attribute = Attribute::from_name(&name)
            .with_context(|| format!("未知的属性名: {}", name))?;
        table.set(attribute, threshold)?;
    }

    tracing::info!("已加载 {} 个属性阈值", table.len());

    Ok(table)
}
