use thiserror::Error;

/// 客户端错误类型
///
/// 客户端不会把错误展示给用户，只记录日志并保持原有状态
#[derive(Error, Debug)]
pub enum ClientError {
    /// 服务不可达或请求失败
    #[error("transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// 服务地址不合法
    #[error("invalid service url `{0}`")]
    InvalidUrl(String),

    /// 服务拒绝了请求
    #[error("service rejected the call with {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// 客户端操作结果类型
pub type ClientResult<T> = Result<T, ClientError>;
