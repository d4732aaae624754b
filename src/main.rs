use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动 Showcase 服务...");

    // 数据存储在这里创建，生命周期与服务一致
    let store = database::initialize_store(&config)
        .await
        .wrap_err("Initialize showcase store")?;

    // 关闭信号：Ctrl-C 时发送 true，web服务收到后优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut web = tokio::spawn(web_service::start_web_service(store, config.clone(), shutdown_rx));

    tokio::select! {
        // 服务提前退出（例如端口被占用），直接返回其结果
        result = &mut web => {
            return result.wrap_err("Join web service task")?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.wrap_err("Listen for shutdown signal")?;
        }
    }

    info!("📴 收到关闭信号，开始关闭服务...");
    if shutdown_tx.send(true).is_err() {
        error!("❌ Web Service 已提前退出");
    }

    web.await.wrap_err("Join web service task")??;

    info!("✅ Showcase 服务已停止");
    Ok(())
}
