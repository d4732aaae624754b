//! 评论仓库 trait 定义

use crate::models::comment::{CommentCreate, CommentInfo};
use crate::DatabaseResult;

/// 评论仓库trait定义
///
/// 评论只支持追加和查询
#[async_trait::async_trait]
pub trait CommentRepositoryTrait: Send + Sync + 'static {
    /// 查询指定项目的评论，按写入顺序
    ///
    /// # 参数
    /// - `project_id`: 项目 ID，不存在时返回空列表
    async fn list_comments(&self, project_id: u64) -> DatabaseResult<Vec<CommentInfo>>;

    /// 创建评论
    ///
    /// # 返回值
    /// 返回带有新分配ID和时间戳的评论
    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo>;

    /// 全部评论数量
    async fn count_comments(&self) -> DatabaseResult<usize>;
}
