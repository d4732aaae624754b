//! 评论相关接口

use crate::models::comments::{CommentCreate, CommentInfo};
use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info};
use validator::Validate;

/// 查询项目评论
///
/// 按写入顺序返回，未知项目返回空列表。
#[utoipa::path(get,
    path = "/projects/{id}/comments",
    tag = "comments",
    params(
        ("id" = u64, Path, description = "项目ID")
    ),
    responses(
        (status = 200, description = "Comments of the project", body = ReplyList<CommentInfo>)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(project_id): Path<u64>,
) -> Result<Json<ReplyList<CommentInfo>>, AppError> {
    debug!("🔍 查询项目 {} 的评论", project_id);

    let comments = state.showcase_service.get_comments(project_id).await?;

    Ok(Json(ReplyList::new(comments.into_iter().map(Into::into).collect())))
}

/// 新增评论
///
/// 评论内容不能为空白，项目必须存在，成功后返回新评论的ID。
#[utoipa::path(post,
    path = "/projects/{id}/comments",
    tag = "comments",
    params(
        ("id" = u64, Path, description = "项目ID")
    ),
    request_body = CommentCreate,
    responses(
        (status = 200, description = "New comment id", body = Reply<u64>),
        (status = 400, description = "Invalid comment"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    Path(project_id): Path<u64>,
    Json(comment): Json<CommentCreate>,
) -> Result<Json<Reply<u64>>, AppError> {
    debug!("📝 项目 {} 新增评论 {:#?}", project_id, comment);

    // 验证输入参数，确保有效性
    comment.validate()?;

    let id = state
        .showcase_service
        .add_comment(project_id, comment.author, comment.content)
        .await?;

    info!("💬 项目 {} 新增评论 {}", project_id, id);
    Ok(Json(Reply { data: id }))
}
