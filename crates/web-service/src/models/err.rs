use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Resource not found: {msg}")).into_response(),
                DatabaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, format!("Validation error: {msg}")).into_response(),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response(),
            },
        }
    }
}
