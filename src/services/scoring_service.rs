//! 评分服务 - 业务能力层
//!
//! 只负责"给一段文本打分"，不关心阈值和评论

use std::sync::Arc;

use tracing::{debug, error};

use crate::clients::{PerspectiveClient, ScoringBackend};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Attribute, ScoreSet};

/// 评分服务
///
/// 后端为 None 表示评分凭证缺失，每次调用都在发出请求前失败
pub struct ScoringService {
    backend: Option<Arc<dyn ScoringBackend>>,
    languages: Vec<String>,
    attributes: Vec<Attribute>,
}

impl ScoringService {
    /// 根据配置创建评分服务
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let backend = match config.perspective_api_key {
            Some(_) => Some(Arc::new(PerspectiveClient::new(config)?) as Arc<dyn ScoringBackend>),
            None => None,
        };

        Ok(Self::with_backend(backend, config.languages.clone()))
    }

    /// 使用指定后端创建评分服务
    pub fn with_backend(backend: Option<Arc<dyn ScoringBackend>>, languages: Vec<String>) -> Self {
        Self {
            backend,
            languages,
            attributes: Attribute::ALL.to_vec(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// 请求评分
    ///
    /// 凭证缺失时返回配置错误，不发出任何网络请求
    pub async fn score(&self, text: &str) -> AppResult<ScoreSet> {
        let backend = self.backend.as_ref().ok_or_else(|| {
            error!("❌ Perspective API 凭证缺失，拒绝请求");
            AppError::missing_credential("PERSPECTIVE_API_KEY")
        })?;

        let scores = backend
            .score(text, &self.languages, &self.attributes)
            .await
            .map_err(|e| {
                error!("❌ 评分服务调用失败: {}", e);
                AppError::Scoring(e)
            })?;

        debug!("收到 {} 个属性评分", scores.len());

        Ok(scores)
    }
}
