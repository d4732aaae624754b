use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[schema(example = 1)]
    /// 项目ID
    pub id: u64,

    #[schema(example = "Quarterly Report Dashboard")]
    /// 项目名称
    pub title: String,

    #[schema(example = "Corporate")]
    /// 项目分类，任意字符串
    pub category: String,

    #[schema(example = "Dana Ortiz")]
    /// 项目作者
    pub author: String,

    #[schema(example = "📊")]
    /// 展示占位符
    pub image: String,

    /// 是否为精选项目
    pub featured: bool,

    /// 是否为星标项目
    pub starred: bool,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(p: database::ProjectInfo) -> Self {
        Self {
            id: p.id,
            title: p.title,
            category: p.category,
            author: p.author,
            image: p.image,
            featured: p.featured,
            starred: p.starred,
        }
    }
}
