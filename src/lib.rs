//! # Cyberbully Analysis
//!
//! 将用户提交的文本交给 Perspective API 评分，必要时再交给 LLM 生成评论
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 外部服务调用，只暴露能力
//! - `PerspectiveClient` - 毒性评分
//! - `LlmClient` - 评论生成
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `ScoringService` - 评分能力（凭证缺失时在请求前失败）
//! - `CommentaryService` - 评论能力（失败降级为占位文本）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次请求"的完整处理流程
//! - `decide_commentary` - 阈值判断（纯函数）
//! - `AnalysisFlow` - 流程编排（score → threshold → commentary）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - axum 服务、路由与错误映射
//!
//! ### ⑤ 展示层（Presentation）
//! - `presentation/` - 提交请求、渲染结果
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisResponse, Attribute, ScoreSet, ScoreSetVersion, ThresholdTable};
pub use orchestrator::App;
pub use workflow::AnalysisFlow;
