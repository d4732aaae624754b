//! 项目相关接口
//!
//! 项目数据只读：全部项目、按分类、按视图、分类列表。

use crate::models::common::ReplyList;
use crate::models::err::AppError;
use crate::models::projects::ProjectInfo;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

fn project_list(projects: Vec<database::ProjectInfo>) -> ReplyList<ProjectInfo> {
    ReplyList::new(projects.into_iter().map(Into::into).collect())
}

/// 查询全部项目
///
/// 按写入顺序返回全部项目，不分页。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<ReplyList<ProjectInfo>>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化
/// 2. [`ReplyList`] 是通用的`api-json`格式列表对象
/// 3. [`AppError`] 是错误时返回的Error类型，会自动转换为对应的http错误码
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = ReplyList<ProjectInfo>)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    debug!("🔍 查询全部项目");

    let projects = state.showcase_service.get_projects().await?;

    Ok(Json(project_list(projects)))
}

/// 按分类查询项目
///
/// 分类名称大小写敏感、完全匹配；不存在的分类返回空列表。
#[utoipa::path(get,
    path = "/categories/{category}/projects",
    tag = "projects",
    params(
        ("category" = String, Path, description = "分类名称")
    ),
    responses(
        (status = 200, description = "Projects in the category", body = ReplyList<ProjectInfo>)
    ),
)]
pub async fn get_projects_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    debug!("🔍 按分类查询项目 {:?}", category);

    let projects = state.showcase_service.get_projects_by_category(&category).await?;

    Ok(Json(project_list(projects)))
}

/// 按视图查询项目
///
/// - `featured`: 精选项目
/// - `starred`: 星标项目
/// - `latest`: 全部项目，最后加入的排在最前
///
/// 其他取值返回空列表。
#[utoipa::path(get,
    path = "/tabs/{tab}/projects",
    tag = "projects",
    params(
        ("tab" = String, Path, description = "featured / latest / starred")
    ),
    responses(
        (status = 200, description = "Projects in the tab", body = ReplyList<ProjectInfo>)
    ),
)]
pub async fn get_projects_by_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Json<ReplyList<ProjectInfo>>, AppError> {
    debug!("🔍 按视图查询项目 {:?}", tab);

    let projects = state.showcase_service.get_projects_by_tab(&tab).await?;

    Ok(Json(project_list(projects)))
}

/// 查询分类列表
///
/// 按首次出现的顺序去重
#[utoipa::path(get,
    path = "/categories",
    tag = "projects",
    responses(
        (status = 200, description = "Distinct categories", body = ReplyList<String>)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<ReplyList<String>>, AppError> {
    debug!("🔍 查询分类列表");

    let categories = state.showcase_service.list_categories().await?;

    Ok(Json(ReplyList::new(categories)))
}
