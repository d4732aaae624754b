//! 评论数据模型

use serde::{Deserialize, Serialize};

/// 评论信息结构体
///
/// 评论只追加，写入后不会再被修改或删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInfo {
    pub id: u64,
    pub project_id: u64,
    pub author: String,
    pub content: String,
    /// 写入时间，Unix纳秒时间戳
    pub timestamp: i64,
}

/// 评论创建参数
#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub project_id: u64,
    pub author: String,
    pub content: String,
}
