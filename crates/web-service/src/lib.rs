//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{CommentRepository, ProjectRepository, ShowcaseStore};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::{ShowcaseService, ShowcaseServiceTrait};

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub showcase_service: Arc<dyn ShowcaseServiceTrait>,
}

impl AppState {
    pub fn new(showcase_service: Arc<dyn ShowcaseServiceTrait>) -> Self {
        Self { showcase_service }
    }

    /// 基于内存存储组装仓库和服务
    pub fn from_store(store: Arc<ShowcaseStore>) -> Self {
        let service = ShowcaseService::new(ProjectRepository::new(store.clone()), CommentRepository::new(store));
        Self::new(Arc::new(service))
    }
}

/// 启动 Web 服务
pub async fn start_web_service(store: Arc<ShowcaseStore>, config: Arc<AppConfig>, shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::from_store(store);

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            wait_for_shutdown(shutdown_rx).await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown(mut shutdown_rx: Receiver<bool>) {
    // 如果已经是 true，直接返回
    if *shutdown_rx.borrow() {
        return;
    }

    // 等待信号变化，发送端被丢弃时同样视为关闭
    let _ = shutdown_rx.changed().await;
}
