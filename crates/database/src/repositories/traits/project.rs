//! 项目仓库 trait 定义
//!
//! 定义项目数据操作的抽象接口

use crate::models::project::{ProjectInfo, Tab};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 项目数据只读，支持：
/// - 全部项目查询
/// - 按分类查询
/// - 按视图（Tab）查询
/// - 按ID查询
/// - 分类列表
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 返回全部项目，按写入顺序
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 根据分类查询项目
    ///
    /// # 参数
    /// - `category`: 分类名称，大小写敏感的完全匹配
    ///
    /// # 返回值
    /// 分类不存在时返回空列表
    async fn find_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 根据视图查询项目
    ///
    /// - [`Tab::Featured`]: 精选项目，按写入顺序
    /// - [`Tab::Starred`]: 星标项目，按写入顺序
    /// - [`Tab::Latest`]: 全部项目，最后写入的在最前
    async fn find_projects_by_tab(&self, tab: Tab) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 根据 ID 获取项目信息
    ///
    /// 项目不存在时返回 [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)
    async fn get_project_by_id(&self, id: u64) -> DatabaseResult<ProjectInfo>;

    /// 所有出现过的分类，按首次出现的顺序去重
    async fn list_categories(&self) -> DatabaseResult<Vec<String>>;
}
