//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use database::{CommentInfo, DatabaseResult, ProjectInfo};

/// 存储统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseStats {
    pub projects: usize,
    pub comments: usize,
}

/// 展示平台服务 trait 定义
///
/// 定义了项目浏览和评论相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`ShowcaseService`](crate::services::ShowcaseService) 提供。
/// 路由层通过 `Arc<dyn ShowcaseServiceTrait>` 使用它，测试时可以替换为其他实现。
#[async_trait::async_trait]
pub trait ShowcaseServiceTrait: Send + Sync + 'static {
    /// 返回全部项目，按写入顺序
    async fn get_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 按分类查询项目
    ///
    /// # 参数
    /// - `category`: 分类名称（大小写敏感的完全匹配）
    ///
    /// # 返回值
    /// 未知分类返回空列表
    async fn get_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 按视图查询项目
    ///
    /// # 参数
    /// - `tab`: `featured` / `latest` / `starred`
    ///
    /// # 返回值
    /// 无法识别的视图返回空列表，不返回错误
    async fn get_projects_by_tab(&self, tab: &str) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 查询项目评论
    ///
    /// # 参数
    /// - `project_id`: 项目 ID
    ///
    /// # 返回值
    /// 按写入顺序返回，未知项目返回空列表
    async fn get_comments(&self, project_id: u64) -> DatabaseResult<Vec<CommentInfo>>;

    /// 新增评论
    ///
    /// # 参数
    /// - `project_id`: 项目 ID，必须是已存在的项目
    /// - `author`: 评论作者
    /// - `content`: 评论内容，不能为空白
    ///
    /// # 返回值
    /// 返回新评论的 ID
    async fn add_comment(&self, project_id: u64, author: String, content: String) -> DatabaseResult<u64>;

    /// 所有分类，按首次出现顺序去重
    async fn list_categories(&self) -> DatabaseResult<Vec<String>>;

    /// 存储统计信息
    async fn stats(&self) -> DatabaseResult<ShowcaseStats>;
}
