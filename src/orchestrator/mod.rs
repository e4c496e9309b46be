//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责服务生命周期与 HTTP 接入，是整个系统的入口。
//!
//! ### `app` - 应用
//! - 加载阈值表、创建 AnalysisFlow
//! - 绑定端口、启动 axum 服务、优雅退出
//!
//! ### `handlers` - 请求处理器
//! - `POST /analyze`：请求体 → AnalysisFlow → 响应体
//! - `GET /health`
//! - 错误到 HTTP 状态码的映射
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (HTTP 接入)
//!     ↓
//! workflow::AnalysisFlow (处理单个请求)
//!     ↓
//! services (能力层：scoring / commentary)
//!     ↓
//! clients (外部服务：Perspective / LLM)
//! ```

pub mod app;
pub mod handlers;

pub use app::{build_router, cors_layer, App, AppState};
