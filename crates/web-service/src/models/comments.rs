use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 新建评论
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct CommentCreate {
    #[schema(example = "Anonymous")]
    /// 评论作者，任意文本
    pub author: String,

    #[schema(example = "Nice work")]
    #[validate(custom(function = "not_blank"))]
    /// 评论内容，不能只包含空白字符
    pub content: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 评论信息
#[derive(Deserialize, Debug, ToSchema, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentInfo {
    #[schema(example = 1)]
    /// 评论ID
    pub id: u64,

    #[schema(example = 1)]
    /// 所属项目ID
    pub project_id: u64,

    #[schema(example = "Anonymous")]
    pub author: String,

    #[schema(example = "Nice work")]
    pub content: String,

    #[schema(example = 1718000000000000000_i64)]
    /// 写入时间（Unix纳秒）
    pub timestamp: i64,
}

impl From<database::CommentInfo> for CommentInfo {
    fn from(c: database::CommentInfo) -> Self {
        Self {
            id: c.id,
            project_id: c.project_id,
            author: c.author,
            content: c.content,
            timestamp: c.timestamp,
        }
    }
}
