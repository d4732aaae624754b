use thiserror::Error;

/// 数据存储操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 参数校验错误
    #[error("参数校验错误: {0}")]
    ValidationError(String),

    /// 种子数据错误
    #[error("种子数据错误: {0}")]
    SeedError(String),

    /// 读取种子文件错误
    #[error("读取文件错误: {0}")]
    Io(#[from] std::io::Error),

    /// json解析错误
    #[error("json解析错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatabaseError {
    /// 创建资源不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建参数校验错误
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::ValidationError(msg.to_string())
    }

    /// 创建种子数据错误
    pub fn seed<T: ToString>(msg: T) -> Self {
        Self::SeedError(msg.to_string())
    }
}
