//! 文本分析流程 - 流程层
//!
//! 核心职责：定义"一次分析请求"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验输入
//! 2. 评分（失败则整个请求失败）
//! 3. 阈值判断（纯函数）
//! 4. 按需生成评论（失败降级为占位文本）
//! 5. 组装结果

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResponse, ThresholdTable};
use crate::services::{CommentaryService, ScoringService};
use crate::workflow::analysis_ctx::AnalysisCtx;
use crate::workflow::decision::decide_commentary;

/// 文本分析流程
///
/// - 编排评分与评论两次外部调用，严格先后执行
/// - 请求之间不共享可变状态（请求编号只用于日志）
/// - 只依赖业务能力（services）
pub struct AnalysisFlow {
    scoring: ScoringService,
    commentary: CommentaryService,
    thresholds: ThresholdTable,
    next_request_id: AtomicU64,
    verbose_logging: bool,
}

impl AnalysisFlow {
    /// 根据配置创建分析流程
    pub fn new(config: &Config, thresholds: ThresholdTable) -> anyhow::Result<Self> {
        let mut flow = Self::with_services(
            ScoringService::new(config)?,
            CommentaryService::new(config),
            thresholds,
        );
        flow.verbose_logging = config.verbose_logging;
        Ok(flow)
    }

    /// 使用指定的服务创建分析流程
    pub fn with_services(
        scoring: ScoringService,
        commentary: CommentaryService,
        thresholds: ThresholdTable,
    ) -> Self {
        Self {
            scoring,
            commentary,
            thresholds,
            next_request_id: AtomicU64::new(1),
            verbose_logging: false,
        }
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    pub async fn run(&self, text: &str) -> AppResult<AnalysisResponse> {
        // ========== 步骤 0: 校验输入 ==========
        if text.trim().is_empty() {
            return Err(AppError::invalid_input("文本为空"));
        }

        let ctx = AnalysisCtx::new(self.next_request_id.fetch_add(1, Ordering::Relaxed), text);
        info!("{} 📝 收到分析请求: {}", ctx, ctx.text_preview);

        // ========== 步骤 1: 评分 ==========
        let scores = self.scoring.score(text).await?;
        info!("{} ✓ 评分完成，共 {} 个属性", ctx, scores.len());

        if self.verbose_logging {
            for score in scores.iter() {
                debug!("{}   {}: {:.3}", ctx, score.attribute, score.value);
            }
        }

        // ========== 步骤 2: 阈值判断 ==========
        let commentary_request = decide_commentary(&scores, &self.thresholds, text);

        // ========== 步骤 3: 按需生成评论 ==========
        let commentary = match commentary_request {
            Some(request) => {
                let flagged: Vec<String> = request
                    .high_scores
                    .iter()
                    .map(|high| format!("{}={}", high.attribute, high.formatted_value()))
                    .collect();
                info!("{} ⚠️ 超过阈值: {}", ctx, flagged.join(", "));

                self.commentary.comment(&request).await
            }
            None => {
                info!("{} ✓ 所有属性均低于阈值，不生成评论", ctx);
                None
            }
        };

        // ========== 步骤 4: 组装结果 ==========
        Ok(AnalysisResponse { scores, commentary })
    }
}
