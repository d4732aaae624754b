//! 客户端状态
//!
//! 所有筛选都在已经拉取到的项目列表上完成，不会额外发起请求。
//! 服务调用失败时只记录日志，状态保持调用前的值。

use crate::api::ShowcaseApi;
use crate::models::{Comment, Project};
use shared_lib::{COPIED_FLAG_TTL_MILLIS, DEFAULT_COMMENT_AUTHOR};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error};

/// 项目列表视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// 全部项目
    #[default]
    All,
    /// 精选项目
    Featured,
    /// 最新项目：筛选后的列表倒序
    Latest,
    /// 星标项目
    Starred,
}

impl View {
    /// 根据页面路径选择视图，未知路径返回 `None`
    pub fn from_path(path: &str) -> Option<View> {
        match path {
            "/" | "" => Some(View::All),
            "/featured" => Some(View::Featured),
            "/latest" => Some(View::Latest),
            "/starred" => Some(View::Starred),
            _ => None,
        }
    }
}

/// 展示平台客户端
pub struct ShowcaseClient<A: ShowcaseApi> {
    api: A,
    projects: Vec<Project>,
    selected_category: Option<String>,
    view: View,
    selected_project: Option<u64>,
    comments: Vec<Comment>,
    draft: String,
    copied: HashMap<u64, Instant>,
}

impl<A: ShowcaseApi> ShowcaseClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            projects: Vec::new(),
            selected_category: None,
            view: View::All,
            selected_project: None,
            comments: Vec::new(),
            draft: String::new(),
            copied: HashMap::new(),
        }
    }

    /// 拉取全部项目
    ///
    /// 失败时保留上一次的结果
    pub async fn load_projects(&mut self) {
        match self.api.get_projects().await {
            Ok(projects) => {
                debug!("📥 加载了 {} 个项目", projects.len());
                self.projects = projects;
            }
            Err(e) => error!("❌ 获取项目列表失败: {}", e),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// 已加载项目中的分类，按首次出现的顺序去重
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(&project.category);
            }
        }
        categories
    }

    /// 选择分类，`None` 表示全部分类
    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// 当前需要展示的项目：先按分类筛选，再应用视图
    pub fn visible_projects(&self) -> Vec<&Project> {
        let filtered = self
            .projects
            .iter()
            .filter(|p| self.selected_category.as_deref().map_or(true, |c| p.category == c));

        match self.view {
            View::All => filtered.collect(),
            View::Featured => filtered.filter(|p| p.featured).collect(),
            View::Starred => filtered.filter(|p| p.starred).collect(),
            View::Latest => {
                let mut projects: Vec<&Project> = filtered.collect();
                projects.reverse();
                projects
            }
        }
    }

    /// 打开评论面板并拉取该项目的评论
    pub async fn open_comments(&mut self, project_id: u64) {
        if self.selected_project != Some(project_id) {
            self.comments.clear();
        }
        self.selected_project = Some(project_id);
        self.refresh_comments().await;
    }

    /// 关闭评论面板
    pub fn close_comments(&mut self) {
        self.selected_project = None;
        self.comments.clear();
    }

    pub fn selected_project(&self) -> Option<u64> {
        self.selected_project
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    async fn refresh_comments(&mut self) {
        let Some(project_id) = self.selected_project else {
            return;
        };
        match self.api.get_comments(project_id).await {
            Ok(comments) => self.comments = comments,
            Err(e) => error!("❌ 获取项目 {} 的评论失败: {}", project_id, e),
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// 提交评论草稿
    ///
    /// 没有打开评论面板或草稿为空白时不做任何事。
    /// 提交成功后重新拉取评论并清空草稿；失败时草稿保留。
    pub async fn submit_comment(&mut self) {
        let Some(project_id) = self.selected_project else {
            return;
        };
        if self.draft.trim().is_empty() {
            return;
        }

        match self.api.add_comment(project_id, DEFAULT_COMMENT_AUTHOR, &self.draft).await {
            Ok(id) => {
                debug!("💬 评论 {} 已提交", id);
                self.refresh_comments().await;
                self.draft.clear();
            }
            Err(e) => error!("❌ 提交评论失败: {}", e),
        }
    }

    /// 标记项目链接已复制，标记在固定时间后失效
    pub fn mark_copied(&mut self, project_id: u64) {
        self.copied.insert(project_id, Instant::now());
    }

    pub fn is_copied(&self, project_id: u64) -> bool {
        self.copied
            .get(&project_id)
            .is_some_and(|at| at.elapsed() < Duration::from_millis(COPIED_FLAG_TTL_MILLIS))
    }

    /// 清理已经失效的复制标记
    pub fn clear_expired_copies(&mut self) {
        let ttl = Duration::from_millis(COPIED_FLAG_TTL_MILLIS);
        self.copied.retain(|_, at| at.elapsed() < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        projects: Vec<Project>,
        comments: Mutex<Vec<Comment>>,
        failing: AtomicBool,
        project_calls: AtomicUsize,
        comment_calls: AtomicUsize,
    }

    impl FakeApi {
        fn with_projects(projects: Vec<Project>) -> Self {
            Self {
                projects,
                ..Default::default()
            }
        }

        fn check(&self) -> ClientResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ClientError::Rejected {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl ShowcaseApi for FakeApi {
        async fn get_projects(&self) -> ClientResult<Vec<Project>> {
            self.project_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            Ok(self.projects.clone())
        }

        async fn get_projects_by_category(&self, category: &str) -> ClientResult<Vec<Project>> {
            self.check()?;
            Ok(self.projects.iter().filter(|p| p.category == category).cloned().collect())
        }

        async fn get_projects_by_tab(&self, _tab: &str) -> ClientResult<Vec<Project>> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn get_comments(&self, project_id: u64) -> ClientResult<Vec<Comment>> {
            self.comment_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let comments = self.comments.lock().unwrap();
            Ok(comments.iter().filter(|c| c.project_id == project_id).cloned().collect())
        }

        async fn add_comment(&self, project_id: u64, author: &str, content: &str) -> ClientResult<u64> {
            self.check()?;
            let mut comments = self.comments.lock().unwrap();
            let id = comments.len() as u64 + 1;
            comments.push(Comment {
                id,
                project_id,
                author: author.to_string(),
                content: content.to_string(),
                timestamp: id as i64,
            });
            Ok(id)
        }
    }

    fn project(id: u64, category: &str, featured: bool, starred: bool) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category: category.to_string(),
            author: "someone".to_string(),
            image: "📦".to_string(),
            featured,
            starred,
        }
    }

    fn catalog() -> Vec<Project> {
        vec![
            project(1, "Corporate", true, false),
            project(2, "Creative", false, true),
            project(3, "Corporate", true, true),
            project(4, "Hardware", false, false),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id).collect()
    }

    async fn loaded_client() -> ShowcaseClient<FakeApi> {
        let mut client = ShowcaseClient::new(FakeApi::with_projects(catalog()));
        client.load_projects().await;
        client
    }

    #[tokio::test]
    async fn filters_run_in_memory() {
        let mut client = loaded_client().await;
        assert_eq!(client.categories(), vec!["Corporate", "Creative", "Hardware"]);
        assert_eq!(ids(&client.visible_projects()), vec![1, 2, 3, 4]);

        client.set_view(View::Featured);
        assert_eq!(ids(&client.visible_projects()), vec![1, 3]);

        client.set_view(View::Starred);
        assert_eq!(ids(&client.visible_projects()), vec![2, 3]);

        client.set_view(View::Latest);
        assert_eq!(ids(&client.visible_projects()), vec![4, 3, 2, 1]);

        client.select_category(Some("Corporate".to_string()));
        assert_eq!(ids(&client.visible_projects()), vec![3, 1]);

        client.set_view(View::Starred);
        assert_eq!(ids(&client.visible_projects()), vec![3]);

        client.select_category(Some("Unknown".to_string()));
        assert!(client.visible_projects().is_empty());

        client.select_category(None);
        client.set_view(View::All);
        assert_eq!(ids(&client.visible_projects()), vec![1, 2, 3, 4]);

        assert_eq!(client.api.project_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn views_map_from_paths() {
        assert_eq!(View::from_path("/"), Some(View::All));
        assert_eq!(View::from_path("/featured"), Some(View::Featured));
        assert_eq!(View::from_path("/latest"), Some(View::Latest));
        assert_eq!(View::from_path("/starred"), Some(View::Starred));
        assert_eq!(View::from_path("/popular"), None);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_projects() {
        let mut client = loaded_client().await;
        client.api.failing.store(true, Ordering::SeqCst);
        client.load_projects().await;
        assert_eq!(client.projects().len(), 4);
    }

    #[tokio::test]
    async fn submit_posts_refetches_and_clears_draft() {
        let mut client = loaded_client().await;
        client.open_comments(1).await;
        assert_eq!(client.selected_project(), Some(1));
        assert!(client.comments().is_empty());

        client.set_draft("Nice work");
        client.submit_comment().await;

        assert_eq!(client.draft(), "");
        assert_eq!(client.comments().len(), 1);
        assert_eq!(client.comments()[0].author, "Anonymous");
        assert_eq!(client.comments()[0].content, "Nice work");
        assert_eq!(client.comments()[0].project_id, 1);
    }

    #[tokio::test]
    async fn blank_draft_or_closed_panel_sends_nothing() {
        let mut client = loaded_client().await;

        client.set_draft("hello");
        client.submit_comment().await;
        assert_eq!(client.draft(), "hello");

        client.open_comments(2).await;
        client.set_draft("   ");
        client.submit_comment().await;
        assert!(client.api.comments.lock().unwrap().is_empty());
        assert_eq!(client.api.comment_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft_and_comments() {
        let mut client = loaded_client().await;
        client.open_comments(1).await;
        client.set_draft("first");
        client.submit_comment().await;
        assert_eq!(client.comments().len(), 1);

        client.api.failing.store(true, Ordering::SeqCst);
        client.set_draft("second");
        client.submit_comment().await;
        assert_eq!(client.draft(), "second");
        assert_eq!(client.comments().len(), 1);
    }

    #[tokio::test]
    async fn switching_projects_replaces_comments() {
        let mut client = loaded_client().await;
        client.open_comments(1).await;
        client.set_draft("on one");
        client.submit_comment().await;

        client.open_comments(2).await;
        assert!(client.comments().is_empty());

        client.close_comments();
        assert_eq!(client.selected_project(), None);
        assert!(client.comments().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn copied_flag_expires() {
        let mut client = loaded_client().await;
        client.mark_copied(3);
        assert!(client.is_copied(3));
        assert!(!client.is_copied(1));

        tokio::time::advance(Duration::from_millis(COPIED_FLAG_TTL_MILLIS - 1)).await;
        assert!(client.is_copied(3));

        tokio::time::advance(Duration::from_millis(2)).await;
        assert!(!client.is_copied(3));

        client.clear_expired_copies();
        assert!(client.copied.is_empty());
    }
}
