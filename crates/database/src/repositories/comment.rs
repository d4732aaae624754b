//! 评论仓库
//!
//! 负责评论的查询和写入

use crate::models::comment::{CommentCreate, CommentInfo};
use crate::repositories::traits::CommentRepositoryTrait;
use crate::store::ShowcaseStore;
use crate::DatabaseResult;
use std::sync::Arc;
use tracing::debug;

/// 评论仓库结构体
#[derive(Debug, Clone)]
pub struct CommentRepository {
    store: Arc<ShowcaseStore>,
}

impl CommentRepository {
    /// 创建新的评论仓库实例
    pub fn new(store: Arc<ShowcaseStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CommentRepositoryTrait for CommentRepository {
    async fn list_comments(&self, project_id: u64) -> DatabaseResult<Vec<CommentInfo>> {
        debug!("🔍 查询项目 {} 的评论", project_id);

        let comments = self.store.comments_for(project_id).await;

        debug!("✅ 查询完成 - 找到 {} 条评论", comments.len());
        Ok(comments)
    }

    async fn create_comment(&self, comment: CommentCreate) -> DatabaseResult<CommentInfo> {
        debug!("📝 创建评论: {:#?}", comment);

        let info = self.store.append_comment(comment).await;

        debug!("✅ 评论创建成功: {:#?}", info);
        Ok(info)
    }

    async fn count_comments(&self) -> DatabaseResult<usize> {
        Ok(self.store.comment_count().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectInfo;

    fn repository() -> CommentRepository {
        let store = ShowcaseStore::new(vec![ProjectInfo {
            id: 1,
            title: "Only".to_string(),
            category: "Corporate".to_string(),
            author: "someone".to_string(),
            image: "🏢".to_string(),
            featured: true,
            starred: false,
        }])
        .unwrap();
        CommentRepository::new(Arc::new(store))
    }

    #[tokio::test]
    async fn created_comment_is_visible_to_next_read() {
        let repo = repository();
        let created = repo
            .create_comment(CommentCreate {
                project_id: 1,
                author: "Anonymous".to_string(),
                content: "Nice work".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(repo.list_comments(1).await.unwrap(), vec![created]);
        assert!(repo.list_comments(2).await.unwrap().is_empty());
        assert_eq!(repo.count_comments().await.unwrap(), 1);
    }
}
