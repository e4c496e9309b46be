/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::ThresholdTable;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
/// - `thresholds`: 生效的阈值表
pub fn log_startup(config: &Config, thresholds: &ThresholdTable) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 文本分析服务启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 监听地址: {}", config.listen_addr());
    info!("📊 阈值表: {}", thresholds);
    info!("🧾 评分格式: {:?}", config.scores_version);
    info!("⏱️ 外部调用超时: {} 秒", config.request_timeout_secs);
    if config.cors_allowed_origins.is_empty() {
        info!("🔓 CORS: 允许任意来源");
    } else {
        info!("🔒 CORS 来源: {}", config.cors_allowed_origins.join(", "));
    }
    info!("{}", "=".repeat(60));

    if config.perspective_api_key.is_none() {
        warn!("⚠️ PERSPECTIVE_API_KEY 未设置，所有分析请求都将失败");
    }
    if config.commentary_enabled() {
        info!("🤖 评论服务已启用，模型: {}", config.llm_model_name);
    } else {
        warn!("⚠️ 评论服务凭证未设置，将跳过评论生成");
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
