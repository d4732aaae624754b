use crate::models::common::HealthInfo;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::State;
use axum::Json;

/// 服务健康检查
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthInfo)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthInfo>, AppError> {
    let stats = state.showcase_service.stats().await?;

    Ok(Json(HealthInfo {
        status: "healthy".to_string(),
        service: "showcase".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        projects: stats.projects,
        comments: stats.comments,
    }))
}
