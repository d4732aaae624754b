use crate::models::constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::{Help, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Web服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: SocketAddr,

    /// 项目种子数据文件（json数组）
    ///
    /// 未设置 `SEED_PATH` 时使用内置的演示数据
    pub seed_path: Option<PathBuf>,

    /// 日志级别，通过 `LOG_LEVEL` 设置
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).wrap_err("Can not parse .env file");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据给定的查找函数构建配置
    ///
    /// [`AppConfig::load`] 使用环境变量作为数据源，测试时可以传入任意的键值来源。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("Invalid BIND_ADDR")
            .suggestion("BIND_ADDR 需要是 `ip:port` 格式，例如 0.0.0.0:8080")?;

        let seed_path = lookup("SEED_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .parse::<Level>()
            .map_err(|e| eyre!("Invalid LOG_LEVEL: {e}"))
            .suggestion("LOG_LEVEL 可选值: trace/debug/info/warn/error")?;

        Ok(AppConfig {
            bind_addr,
            seed_path,
            log_level,
        })
    }
}
