use serde::Deserialize;

/// 项目
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub author: String,
    pub image: String,
    pub featured: bool,
    pub starred: bool,
}

/// 评论
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub project_id: u64,
    pub author: String,
    pub content: String,
    pub timestamp: i64,
}

/// 服务端单个对象的返回格式
#[derive(Debug, Deserialize)]
pub(crate) struct Reply<T> {
    pub data: T,
}

/// 服务端列表的返回格式
#[derive(Debug, Deserialize)]
pub(crate) struct ReplyList<T> {
    pub data: Vec<T>,
}
