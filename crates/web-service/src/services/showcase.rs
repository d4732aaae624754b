//! 展示平台服务
//!
//! 提供项目浏览和评论相关的业务逻辑操作

use crate::services::traits::{ShowcaseServiceTrait, ShowcaseStats};
use database::{
    CommentCreate, CommentInfo, CommentRepositoryTrait, DatabaseError, DatabaseResult, ProjectInfo,
    ProjectRepositoryTrait, Tab,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ShowcaseService<PR: ProjectRepositoryTrait, CR: CommentRepositoryTrait> {
    project_repository: PR,
    comment_repository: CR,
}

impl<PR: ProjectRepositoryTrait, CR: CommentRepositoryTrait> ShowcaseService<PR, CR> {
    pub fn new(project_repository: PR, comment_repository: CR) -> Self {
        Self {
            project_repository,
            comment_repository,
        }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait, CR: CommentRepositoryTrait> ShowcaseServiceTrait for ShowcaseService<PR, CR> {
    async fn get_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        self.project_repository.list_projects().await
    }

    async fn get_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>> {
        self.project_repository.find_projects_by_category(category).await
    }

    async fn get_projects_by_tab(&self, tab: &str) -> DatabaseResult<Vec<ProjectInfo>> {
        match tab.parse::<Tab>() {
            Ok(tab) => self.project_repository.find_projects_by_tab(tab).await,
            Err(err) => {
                debug!("⚠️ {}，返回空列表", err);
                Ok(Vec::new())
            }
        }
    }

    async fn get_comments(&self, project_id: u64) -> DatabaseResult<Vec<CommentInfo>> {
        self.comment_repository.list_comments(project_id).await
    }

    async fn add_comment(&self, project_id: u64, author: String, content: String) -> DatabaseResult<u64> {
        if content.trim().is_empty() {
            return Err(DatabaseError::validation("comment content must not be blank"));
        }

        // 评论只能挂在已存在的项目上
        self.project_repository.get_project_by_id(project_id).await?;

        let comment = self
            .comment_repository
            .create_comment(CommentCreate {
                project_id,
                author,
                content,
            })
            .await?;

        Ok(comment.id)
    }

    async fn list_categories(&self) -> DatabaseResult<Vec<String>> {
        self.project_repository.list_categories().await
    }

    async fn stats(&self) -> DatabaseResult<ShowcaseStats> {
        Ok(ShowcaseStats {
            projects: self.project_repository.list_projects().await?.len(),
            comments: self.comment_repository.count_comments().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{CommentRepository, ProjectRepository, ShowcaseStore};
    use std::sync::Arc;

    fn project(id: u64, category: &str, featured: bool, starred: bool) -> ProjectInfo {
        ProjectInfo {
            id,
            title: format!("Project {id}"),
            category: category.to_string(),
            author: "someone".to_string(),
            image: "📦".to_string(),
            featured,
            starred,
        }
    }

    fn service() -> ShowcaseService<ProjectRepository, CommentRepository> {
        let store = Arc::new(
            ShowcaseStore::new(vec![
                project(1, "Corporate", true, false),
                project(2, "Creative", false, true),
            ])
            .unwrap(),
        );
        ShowcaseService::new(ProjectRepository::new(store.clone()), CommentRepository::new(store))
    }

    fn ids(projects: &[ProjectInfo]) -> Vec<u64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn tab_queries_follow_the_catalog() {
        let service = service();
        assert_eq!(ids(&service.get_projects_by_tab("featured").await.unwrap()), vec![1]);
        assert_eq!(ids(&service.get_projects_by_tab("starred").await.unwrap()), vec![2]);
        assert_eq!(ids(&service.get_projects_by_tab("latest").await.unwrap()), vec![2, 1]);
    }

    #[tokio::test]
    async fn unknown_tab_yields_empty_list() {
        let service = service();
        assert!(service.get_projects_by_tab("popular").await.unwrap().is_empty());
        assert!(service.get_projects_by_tab("FEATURED").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_comment_round_trip() {
        let service = service();
        let id = service
            .add_comment(1, "Anonymous".to_string(), "Nice work".to_string())
            .await
            .unwrap();
        assert_eq!(id, 1);

        let comments = service.get_comments(1).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[0].project_id, 1);
        assert_eq!(comments[0].author, "Anonymous");
        assert_eq!(comments[0].content, "Nice work");

        let next = service.add_comment(2, "Anonymous".to_string(), "Also nice".to_string()).await.unwrap();
        assert!(next > id);
        assert_eq!(service.stats().await.unwrap(), ShowcaseStats { projects: 2, comments: 2 });
    }

    #[tokio::test]
    async fn add_comment_rejects_unknown_project_and_blank_content() {
        let service = service();
        let err = service.add_comment(99, "Anonymous".to_string(), "hello".to_string()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound(_)));

        let err = service.add_comment(1, "Anonymous".to_string(), "   ".to_string()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ValidationError(_)));

        assert!(service.get_comments(1).await.unwrap().is_empty());
    }
}
