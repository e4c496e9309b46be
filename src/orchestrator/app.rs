//! 应用 - 编排层
//!
//! 负责服务的初始化、路由和运行，不处理单个请求的细节

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{load_threshold_table, ScoreSetVersion, ThresholdTable};
use crate::orchestrator::handlers;
use crate::utils::logging::log_startup;
use crate::workflow::AnalysisFlow;

/// 处理器共享状态
///
/// 只读共享，请求之间没有可变状态
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<AnalysisFlow>,
    pub scores_version: ScoreSetVersion,
}

/// 应用主结构
pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let thresholds = match &config.thresholds_file {
            Some(path) => load_threshold_table(Path::new(path)).await?,
            None => ThresholdTable::default(),
        };

        log_startup(&config, &thresholds);

        let flow = AnalysisFlow::new(&config, thresholds).context("无法创建分析流程")?;

        let state = AppState {
            flow: Arc::new(flow),
            scores_version: config.scores_version,
        };

        Ok(Self { config, state })
    }

    /// 路由
    pub fn router(&self) -> Router {
        build_router(
            self.state.clone(),
            cors_layer(&self.config.cors_allowed_origins),
        )
    }

    /// 运行服务直到收到退出信号
    pub async fn run(self) -> Result<()> {
        let listen_addr = self.config.listen_addr();
        let listener = TcpListener::bind(&listen_addr)
            .await
            .with_context(|| format!("无法绑定地址 {}", listen_addr))?;

        info!("✓ 服务已启动: http://{}", listen_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP 服务异常退出")?;

        info!("👋 服务已关闭");
        Ok(())
    }
}

/// 构建路由
///
/// CORS 层放在最外层，预检请求不会进入处理器
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(middleware::from_fn(handlers::log_http_request))
        .layer(cors)
}

/// 跨域策略：未配置来源或包含 `*` 时允许任意来源
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ 忽略无效的 CORS 来源: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
