//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置
//! - 全局常量

pub mod models;

// 重新导出常用类型
pub use models::{
    AppConfig,
    // 常量
    COPIED_FLAG_TTL_MILLIS, DEFAULT_BIND_ADDR, DEFAULT_COMMENT_AUTHOR, DEFAULT_LOG_LEVEL,
};
