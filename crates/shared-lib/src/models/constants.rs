//! 常量定义模块
//!
//! 统一管理服务端和客户端共用的默认值，确保两端保持一致。

/// 服务默认监听地址
///
/// 可通过环境变量 `BIND_ADDR` 覆盖
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 客户端提交评论时使用的固定作者名
pub const DEFAULT_COMMENT_AUTHOR: &str = "Anonymous";

/// 客户端"已复制"标记的保留时间（毫秒）
pub const COPIED_FLAG_TTL_MILLIS: u64 = 2000;
