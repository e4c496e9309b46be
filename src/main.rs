use anyhow::Result;
use cyberbully_analysis::utils::logging;
use cyberbully_analysis::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env（不存在时忽略）
    let env_file = dotenvy::dotenv().ok();

    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);
    if let Some(path) = env_file {
        tracing::info!("✓ 已加载 .env: {}", path.display());
    }

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
