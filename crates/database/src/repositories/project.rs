//! 项目仓库
//!
//! 负责项目相关的数据查询

use crate::models::project::{ProjectInfo, Tab};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::store::ShowcaseStore;
use crate::{DatabaseError, DatabaseResult};
use std::sync::Arc;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    store: Arc<ShowcaseStore>,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(store: Arc<ShowcaseStore>) -> Self {
        Self { store }
    }

    fn filter_projects<F>(&self, predicate: F) -> Vec<ProjectInfo>
    where
        F: Fn(&ProjectInfo) -> bool,
    {
        self.store.projects().iter().filter(|&p| predicate(p)).cloned().collect()
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部项目");
        Ok(self.store.projects().to_vec())
    }

    async fn find_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 按分类查询项目 - 分类: {:?}", category);

        let projects = self.filter_projects(|p| p.category == category);

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    /// 根据视图查询项目
    ///
    /// 项目没有创建时间字段，`latest` 视图直接按写入顺序倒序返回。
    async fn find_projects_by_tab(&self, tab: Tab) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 按视图查询项目 - 视图: {}", tab);

        let projects = match tab {
            Tab::Featured => self.filter_projects(|p| p.featured),
            Tab::Starred => self.filter_projects(|p| p.starred),
            Tab::Latest => self.store.projects().iter().rev().cloned().collect(),
        };

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    async fn get_project_by_id(&self, id: u64) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        self.store
            .project(id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))
    }

    async fn list_categories(&self) -> DatabaseResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for project in self.store.projects() {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        Ok(categories)
    }
}
